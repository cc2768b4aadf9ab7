//! Wrapped remote-session command construction
// (c) 2025 Ross Younger

/// Builds the argv for the wrapped ssh client.
///
/// `options` are passed through verbatim ahead of the destination, so
/// anything ssh accepts can be relayed.
pub(crate) fn build_ssh_command(
    ssh: &str,
    options: &[String],
    destination: &str,
    remote_command: &[String],
) -> Vec<String> {
    let mut argv = Vec::with_capacity(2 + options.len() + remote_command.len());
    argv.push(ssh.to_string());
    argv.extend_from_slice(options);
    argv.push(destination.to_string());
    argv.extend_from_slice(remote_command);
    argv
}

/// The host part of a `[user@]host` destination.
pub(crate) fn host_part(destination: &str) -> &str {
    let (_, host) = destination.split_once('@').unwrap_or(("", destination));
    host
}

///////////////////////////////////////////////////////////////////////////////////////
