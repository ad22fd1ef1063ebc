//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Pavel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is never read from or written to this file.

[model]
# tier = "flash"               # flash, pro

[persona]
# show_in_transcript = true    # false stores the persona seed as a hidden system turn

[network]
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10    # 1-120
# request_timeout_secs = 300   # 1-3600; unset waits for the remote side

[logging]
# level = "WARNING"            # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
