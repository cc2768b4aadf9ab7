//! Per-emulator command templates
// (c) 2025 Ross Younger

use std::fmt::Write;

use super::{Emulator, TerminalKind, WindowOptions};

/// Plain xterm
#[derive(Debug, Clone, Copy)]
pub(super) struct Xterm;

impl Emulator for Xterm {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Generic
    }

    fn command(&self, window: &WindowOptions, session: &[String]) -> Vec<String> {
        let mut argv = vec!["xterm".to_string()];
        if let Some(geometry) = window.geometry {
            argv.push("-geometry".to_string());
            argv.push(geometry.to_string());
        }
        argv.push("-e".to_string());
        argv.extend_from_slice(session);
        argv
    }
}

/// gnome-terminal; colour schemes name profiles
#[derive(Debug, Clone, Copy)]
pub(super) struct GnomeTerminal;

impl Emulator for GnomeTerminal {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Gnome
    }

    fn command(&self, window: &WindowOptions, session: &[String]) -> Vec<String> {
        let mut argv = vec!["gnome-terminal".to_string()];
        if let Some(geometry) = window.geometry {
            argv.push(format!("--geometry={geometry}"));
        }
        if let Some(scheme) = &window.colour_scheme {
            argv.push(format!("--window-with-profile={scheme}"));
        }
        argv.push("--".to_string());
        argv.extend_from_slice(session);
        argv
    }
}

/// xfce4-terminal
#[derive(Debug, Clone, Copy)]
pub(super) struct Xfce4Terminal;

impl Emulator for Xfce4Terminal {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Xfce4
    }

    fn command(&self, window: &WindowOptions, session: &[String]) -> Vec<String> {
        let mut argv = vec!["xfce4-terminal".to_string()];
        if let Some(geometry) = window.geometry {
            argv.push(format!("--geometry={geometry}"));
        }
        if let Some(scheme) = &window.colour_scheme {
            argv.push(format!("--color-scheme={scheme}"));
        }
        argv.push("-x".to_string());
        argv.extend_from_slice(session);
        argv
    }
}

/// Terminal.app takes no useful argv, so we drive it through osascript.
/// Placement offsets cannot be scripted and are ignored.
#[derive(Debug, Clone, Copy)]
pub(super) struct OsxTerminal;

impl Emulator for OsxTerminal {
    fn kind(&self) -> TerminalKind {
        TerminalKind::Osx
    }

    fn command(&self, window: &WindowOptions, session: &[String]) -> Vec<String> {
        let mut script = format!(
            "tell application \"Terminal\"\nactivate\ndo script \"{}\"\n",
            session.join(" ")
        );
        if let Some(scheme) = &window.colour_scheme {
            let _ = writeln!(
                script,
                "set current settings of front window to settings set \"{scheme}\""
            );
        }
        if let Some(geometry) = window.geometry {
            let _ = writeln!(
                script,
                "set number of columns of front window to {}\nset number of rows of front window to {}",
                geometry.width, geometry.height
            );
        }
        script.push_str("end tell");
        vec!["osascript".to_string(), "-e".to_string(), script]
    }
}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use assertables::assert_contains;

    use super::super::{Emulator, WindowOptions};
    use super::{GnomeTerminal, OsxTerminal, Xfce4Terminal, Xterm};
    use crate::config::ssh::Geometry;

    fn session() -> Vec<String> {
        vec!["ssh".into(), "user@web1".into()]
    }

    fn window() -> WindowOptions {
        WindowOptions {
            geometry: Some(Geometry {
                width: 80,
                height: 24,
                offset: Some((10, -5)),
            }),
            colour_scheme: Some("Solarized".into()),
        }
    }

    #[test]
    fn xterm_template() {
        let argv = Xterm.command(&window(), &session());
        assert_eq!(
            argv,
            vec!["xterm", "-geometry", "80x24+10-5", "-e", "ssh", "user@web1"]
        );
    }

    #[test]
    fn xterm_without_options_is_bare() {
        let argv = Xterm.command(&WindowOptions::default(), &session());
        assert_eq!(argv, vec!["xterm", "-e", "ssh", "user@web1"]);
    }

    #[test]
    fn gnome_template() {
        let argv = GnomeTerminal.command(&window(), &session());
        assert_eq!(
            argv,
            vec![
                "gnome-terminal",
                "--geometry=80x24+10-5",
                "--window-with-profile=Solarized",
                "--",
                "ssh",
                "user@web1"
            ]
        );
    }

    #[test]
    fn xfce4_template() {
        let argv = Xfce4Terminal.command(&window(), &session());
        assert_eq!(
            argv,
            vec![
                "xfce4-terminal",
                "--geometry=80x24+10-5",
                "--color-scheme=Solarized",
                "-x",
                "ssh",
                "user@web1"
            ]
        );
    }

    #[test]
    fn osx_template_is_an_applescript() {
        let argv = OsxTerminal.command(&window(), &session());
        assert_eq!(argv[0], "osascript");
        assert_eq!(argv[1], "-e");
        let script = &argv[2];
        assert_contains!(script, "do script \"ssh user@web1\"");
        assert_contains!(script, "settings set \"Solarized\"");
        assert_contains!(script, "number of columns of front window to 80");
        assert_contains!(script, "number of rows of front window to 24");
    }
}
