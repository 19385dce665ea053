//! Title screen drawn while the game waits in the menu state.

use raylib::prelude::{Color, Vector2};

use crate::render::camera::OrthoCamera;
use crate::render::surface::{Surface, TextAlign, WHITE, rgba};
use crate::render::worldrenderer::{VIEWPORT_GUI_HEIGHT, VIEWPORT_GUI_WIDTH};
use crate::resources::gameconfig::PreferencesProvider;

const TITLE: &str = "CANYON RUN";
const TITLE_SIZE: f32 = 48.0;
const LINE_SIZE: f32 = 20.0;
const LINE_SPACING: f32 = 30.0;

const TITLE_COLOR: Color = Color {
    r: 255,
    g: 191,
    b: 64,
    a: 255,
};

/// GUI camera for the menu: y-down, origin at the top-left corner.
pub fn menu_camera() -> OrthoCamera {
    let mut camera = OrthoCamera::new(VIEWPORT_GUI_WIDTH, VIEWPORT_GUI_HEIGHT);
    camera.set_to_ortho(true);
    camera
}

/// Lines under the title, reflecting the current preferences.
pub fn menu_lines(prefs: &dyn PreferencesProvider) -> Vec<String> {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    vec![
        "SPACE or ENTER to play".to_string(),
        format!("F  FPS counter: {}", on_off(prefs.show_fps_counter())),
        format!("M  monochrome: {}", on_off(prefs.use_monochrome_shader())),
        "ESC to quit".to_string(),
    ]
}

pub fn render_menu(surface: &mut dyn Surface, camera: &OrthoCamera, prefs: &dyn PreferencesProvider) {
    surface.begin(camera);
    let center_x = camera.viewport_width / 2.0;
    let mut y = camera.viewport_height * 0.3;
    surface.draw_text(
        TITLE,
        Vector2 { x: center_x, y },
        TITLE_SIZE,
        TITLE_COLOR,
        TextAlign::Center,
    );
    y += TITLE_SIZE + LINE_SPACING;
    for (i, line) in menu_lines(prefs).iter().enumerate() {
        let color = if i == 0 { WHITE } else { rgba(0.75, 0.75, 0.75, 1.0) };
        surface.draw_text(line, Vector2 { x: center_x, y }, LINE_SIZE, color, TextAlign::Center);
        y += LINE_SPACING;
    }
    surface.end();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::RecordingSurface;
    use crate::resources::gameconfig::GameConfig;

    #[test]
    fn test_menu_lists_preferences() {
        let mut config = GameConfig::new();
        config.show_fps_counter = true;
        let mut surface = RecordingSurface::new();
        render_menu(&mut surface, &menu_camera(), &config);
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts[0], TITLE);
        assert!(texts.contains(&"F  FPS counter: on"));
        assert!(texts.contains(&"M  monochrome: off"));
        assert_eq!(surface.region_count(), 0);
    }
}
