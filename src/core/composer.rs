use crate::core::email::is_valid;
use crate::domain::ports::Sender;
use crate::utils::error::ComposeError;

/// Validates `to` and hands the message to `sender`.
///
/// An invalid recipient is rejected before the sender is touched. Whatever
/// the sender returns is passed back unchanged.
pub fn compose_and_send<S>(sender: &S, to: &str, subject: &str, body: &str) -> Result<(), ComposeError>
where
    S: Sender + ?Sized,
{
    if !is_valid(to) {
        return Err(ComposeError::Validation {
            address: to.to_string(),
        });
    }

    sender.send(to, subject, body)?;
    Ok(())
}
