/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# covshare configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[logging]
# level = "info"            # trace, debug, info, warn, error

[layout]
# handle_size = 1.0         # divider thickness in px, 0-20
# handle_color = "black"    # #RRGGBB, #RRGGBBAA, rgba(r,g,b,a) or a color name
# min_width = 0.0           # pane width floor in px
# min_height = 0.0          # pane height floor in px
# hit_slop = 5.0            # grab area on each side of a divider, 0-20

[table]
# min_column_width = 20.0   # 1-200
# select_column_width = 35.0
# default_body_height = 500.0
# multi_select = false
"##
}
