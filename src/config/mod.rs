// (c) 2025 Ross Younger
//! # Configuration management
//!
//! rtty reads its per-host preferences from the user's OpenSSH configuration
//! file (typically `~/.ssh/config`), so window settings live next to the
//! connection settings ssh already keeps for each host. The file is only ever
//! read, never written. A missing file simply means no preferences.
//!
//! ## File format
//!
//! The file is the textual `Key Value` format ssh itself reads, including its
//! quoting rules and `Host` blocks with wildcard patterns. rtty's own
//! directives hide behind the `#rtty-` marker, so ssh treats them as comments:
//!
//! ```text
//! # A small plain window by default
//! Host *
//! #rtty-Geometry 80x24
//!
//! # ...but the web servers get more room. Later blocks override earlier
//! # ones, so the specific entries go last.
//! Host web*.example.com
//! User deploy
//! #rtty-Geometry 120x40+0+0
//! #rtty-Gnome-ColourScheme Solarized
//! ```
//!
//! ## Pattern matching
//!
//! `Host` patterns are shell-style globs (`*`, `?`, `[...]`). A pattern
//! prefixed with `!` excludes: if any negated pattern matches the host, the
//! whole block is skipped for that host, whatever its other patterns say.
//!
//! ## Resolution
//!
//! Directives before the first `Host` line always apply. Matching `Host`
//! blocks are then applied in file order, each overriding the accumulated
//! result key by key — so a later block only replaces the keys it actually
//! sets. (Note this differs from ssh's own rule, where the first obtained
//! value wins; rtty preferences read most-general-first, specific last.)
//!
//! ## Recognised preference keys
//!
//! * `#rtty-Geometry` — window size/placement, e.g. `80x24` or `80x24+100+50`
//! * `#rtty-Osx-ColourScheme`, `#rtty-Gnome-ColourScheme`,
//!   `#rtty-Xfce4-ColourScheme` — colour scheme per terminal kind; the
//!   `ColorScheme` spelling is also accepted
//!
//! Unrecognised directives are retained but never interpreted.

pub mod ssh;
