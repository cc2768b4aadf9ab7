// OS abstraction layer for rtty - Unix implementation
// (c) 2025 Ross Younger

use std::path::PathBuf;

use anyhow::Result;

use super::AbstractPlatform;

/// OS abstraction layer for Unix-like platforms
#[derive(Debug, Clone, Copy)]
pub struct Platform {}

impl AbstractPlatform for Platform {
    fn user_ssh_config() -> Result<PathBuf> {
        let Some(mut buf) = dirs::home_dir() else {
            anyhow::bail!("could not determine home directory");
        };
        buf.push(".ssh");
        buf.push("config");
        Ok(buf)
    }
}

#[cfg(test)]
mod test {
    use super::{AbstractPlatform as _, Platform};

    #[test]
    fn user_config_lives_under_dot_ssh() {
        let path = Platform::user_ssh_config().unwrap();
        assert!(path.ends_with(".ssh/config"));
    }
}
