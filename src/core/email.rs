use crate::domain::model::AddressCheck;

/// Returns `true` when `address` looks like a deliverable email address.
///
/// The check is syntactic only: one `@`, a local part made of non-empty
/// dot-separated atoms, and a domain of at least two non-empty labels of
/// ASCII letters, digits and hyphens. Whitespace and control characters are
/// never accepted.
pub fn is_valid(address: &str) -> bool {
    if address.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain(domain)
}

/// Checks each address and keeps the input alongside the verdict.
pub fn check_all<I, S>(addresses: I) -> Vec<AddressCheck>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    addresses
        .into_iter()
        .map(|address| {
            let address: String = address.into();
            let valid = is_valid(&address);
            AddressCheck { address, valid }
        })
        .collect()
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty() && local.split('.').all(|atom| !atom.is_empty())
}

fn is_valid_domain(domain: &str) -> bool {
    let mut labels = 0;
    for label in domain.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
