//! Terminal emulator selection and window templating
// (c) 2025 Ross Younger

use lazy_static::lazy_static;
use strum::{Display, EnumString};

use crate::config::ssh::Geometry;

mod emulators;

/// The closed set of terminal flavours rtty knows how to drive.
///
/// This selects both the program spawned and which colour-scheme directive is
/// consulted (`#rtty-Gnome-ColourScheme` and friends).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TerminalKind {
    /// Plain xterm; the fallback everywhere
    Generic,
    /// Terminal.app on macOS
    Osx,
    /// gnome-terminal
    Gnome,
    /// xfce4-terminal
    Xfce4,
}

impl TerminalKind {
    /// The key-name prefix for this kind's colour scheme directive.
    /// The generic terminal has none.
    pub(crate) fn scheme_key_prefix(self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Osx => Some("Osx"),
            Self::Gnome => Some("Gnome"),
            Self::Xfce4 => Some("Xfce4"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// The facts about the running environment that emulator detection consults.
///
/// Captured once at startup and passed down explicitly; nothing in this
/// module reads the process environment after that.
#[derive(Debug, Clone, Default)]
pub struct DesktopEnvironment {
    /// `std::env::consts::OS`
    pub os: String,
    /// `$XDG_CURRENT_DESKTOP`, a colon-separated list
    pub desktop: Option<String>,
    /// `$GNOME_DESKTOP_SESSION_ID`, the legacy GNOME marker
    pub gnome_session: Option<String>,
}

impl DesktopEnvironment {
    /// Snapshots the running environment.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            desktop: std::env::var("XDG_CURRENT_DESKTOP").ok(),
            gnome_session: std::env::var("GNOME_DESKTOP_SESSION_ID").ok(),
        }
    }

    fn desktop_is(&self, name: &str) -> bool {
        self.desktop
            .as_deref()
            .is_some_and(|d| d.split(':').any(|part| part.eq_ignore_ascii_case(name)))
    }
}

fn is_macos(env: &DesktopEnvironment) -> bool {
    env.os == "macos"
}

fn is_gnome(env: &DesktopEnvironment) -> bool {
    env.gnome_session.is_some() || env.desktop_is("GNOME")
}

fn is_xfce(env: &DesktopEnvironment) -> bool {
    env.desktop_is("XFCE")
}

type Detector = fn(&DesktopEnvironment) -> bool;

lazy_static! {
    /// Detection table, consulted in order; the first hit wins and Generic is
    /// the fallback.
    static ref DETECTORS: Vec<(TerminalKind, Detector)> = vec![
        (TerminalKind::Osx, is_macos),
        (TerminalKind::Gnome, is_gnome),
        (TerminalKind::Xfce4, is_xfce),
    ];
}

/// Which terminal kind fits this environment?
#[must_use]
pub fn detect(env: &DesktopEnvironment) -> TerminalKind {
    DETECTORS
        .iter()
        .find(|(_, applies)| applies(env))
        .map_or(TerminalKind::Generic, |(kind, _)| *kind)
}

/// Chooses the terminal emulator to spawn, honouring an explicit override.
#[must_use]
pub fn select(env: &DesktopEnvironment, forced: Option<TerminalKind>) -> Box<dyn Emulator> {
    emulator_for(forced.unwrap_or_else(|| detect(env)))
}

/// Constructor mapping from kind to concrete emulator
fn emulator_for(kind: TerminalKind) -> Box<dyn Emulator> {
    match kind {
        TerminalKind::Generic => Box::new(emulators::Xterm),
        TerminalKind::Osx => Box::new(emulators::OsxTerminal),
        TerminalKind::Gnome => Box::new(emulators::GnomeTerminal),
        TerminalKind::Xfce4 => Box::new(emulators::Xfce4Terminal),
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// Per-window presentation settings, resolved from configuration and CLI.
#[derive(Debug, Clone, Default)]
pub struct WindowOptions {
    /// Window size and placement, if known
    pub geometry: Option<Geometry>,
    /// Colour scheme name, as the target emulator understands it
    pub colour_scheme: Option<String>,
}

/// A terminal emulator we know how to spawn a window of.
///
/// Implementations are pure argv templates: they consume the window options
/// and the wrapped session command, and never inspect the environment.
pub trait Emulator: std::fmt::Debug {
    /// Which of the closed set of kinds this is
    fn kind(&self) -> TerminalKind;
    /// The full command line opening a window that runs `session` inside it
    fn command(&self, window: &WindowOptions, session: &[String]) -> Vec<String>;
}

///////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::{detect, select, DesktopEnvironment, TerminalKind};

    fn env(os: &str, desktop: Option<&str>, gnome_session: Option<&str>) -> DesktopEnvironment {
        DesktopEnvironment {
            os: os.to_string(),
            desktop: desktop.map(ToString::to_string),
            gnome_session: gnome_session.map(ToString::to_string),
        }
    }

    #[test]
    fn detection_table() {
        for (environment, expected) in [
            (env("macos", None, None), TerminalKind::Osx),
            (env("linux", Some("ubuntu:GNOME"), None), TerminalKind::Gnome),
            (env("linux", None, Some("this-is-deprecated")), TerminalKind::Gnome),
            (env("linux", Some("XFCE"), None), TerminalKind::Xfce4),
            (env("linux", Some("xfce"), None), TerminalKind::Xfce4),
            (env("linux", Some("KDE"), None), TerminalKind::Generic),
            (env("linux", None, None), TerminalKind::Generic),
            // macOS wins even if X11 desktop variables leak through
            (env("macos", Some("XFCE"), None), TerminalKind::Osx),
        ] {
            assert_eq!(detect(&environment), expected, "environment {environment:?}");
        }
    }

    #[test]
    fn forced_kind_overrides_detection() {
        let emulator = select(&env("macos", None, None), Some(TerminalKind::Xfce4));
        assert_eq!(emulator.kind(), TerminalKind::Xfce4);
    }

    #[test]
    fn kind_parses_from_cli_spellings() {
        assert_eq!("gnome".parse::<TerminalKind>().unwrap(), TerminalKind::Gnome);
        assert_eq!("OSX".parse::<TerminalKind>().unwrap(), TerminalKind::Osx);
        let _ = "konsole".parse::<TerminalKind>().unwrap_err();
    }
}
