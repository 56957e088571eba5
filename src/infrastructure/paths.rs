//! Plugin data locations inside the Zellij sandbox, where the host home
//! directory is mounted under `/host`.

use std::path::PathBuf;

/// Directory for plugin-owned files such as the trace log.
///
/// Maps to `~/.local/share/zellij/zelltable` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zelltable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_host_mount() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/zelltable")
        );
    }
}
