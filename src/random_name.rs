use std::time::SystemTime;

/// A candidate name for the fallback creation path.
///
/// Mixes the process id, a stack address and the current time. The creation
/// call is what actually guarantees uniqueness; a colliding candidate only
/// costs another attempt.
pub(crate) struct RandomName {
    name: String,
}

impl RandomName {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();

        // The address of a local adds variation between call sites.
        let marker = &pid as *const _ as usize;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();

        Self {
            name: format!(
                "{}{}{:x}{:x}{:x}",
                prefix,
                pid,
                marker,
                now.as_secs(),
                now.subsec_nanos()
            ),
        }
    }
}

impl AsRef<str> for RandomName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_starts_with_prefix() {
        let name = RandomName::new("test");
        assert!(name.as_ref().starts_with("test"))
    }
}
