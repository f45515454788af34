//! Constants for reference validation and normalization.

/// Hostname assumed when a name carries no explicit registry host.
pub const DEFAULT_HOSTNAME: &str = "docker.io";

/// Legacy alias of the default hostname; always folded to [`DEFAULT_HOSTNAME`].
pub const LEGACY_DEFAULT_HOSTNAME: &str = "index.docker.io";

/// Namespace implied for single-component names on the default hostname.
pub const DEFAULT_NAMESPACE: &str = "library";

/// Tag attached by `with_default_tag` when a reference has no tag or digest.
pub const DEFAULT_TAG: &str = "latest";

/// The one host recognized without a `.` or `:`.
pub const LOCALHOST: &str = "localhost";

/// Maximum length of the portion of a name before its first `/`.
pub const MAX_NAMESPACE_LENGTH: usize = 255;

/// Maximum tag length.
pub const MAX_TAG_LENGTH: usize = 128;

/// Default namespace as it prefixes a remote name.
pub(crate) const DEFAULT_NAMESPACE_PREFIX: &str = "library/";
