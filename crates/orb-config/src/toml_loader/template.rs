//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Orb Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Orb"
# width = 1280
# height = 800
# transparent = false
# clear_color = "#000000"
# clear_alpha = 1.0        # 0.0-1.0

[camera]
# fov = 75.0               # degrees, 1-179
# near = 0.1
# far = 1000.0
# distance = 10.0
# enable_damping = true
# damping_factor = 0.05    # 0.0-1.0
# rotate_speed = 0.5
# zoom_speed = 1.0
# enable_pan = true
# pan_speed = 1.0
# min_distance = 5.0
# max_distance = 20.0

[orb]
# radius = 2.0
# width_segments = 64      # 3-512
# height_segments = 64     # 2-512
# color1 = "#6600ff"
# color2 = "#00ffff"
# spin_per_frame = 0.005

[particles]
# count = 1000             # 1-1000000
# inner_radius = 4.0
# thickness = 2.0
# size = 0.05
# opacity = 0.8            # 0.0-1.0
# seed = 42                # unset = random cloud every launch

[animation]
# frame_step = 0.016       # seconds of animation time per frame

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
