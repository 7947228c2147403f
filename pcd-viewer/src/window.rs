use std::rc::Rc;

use kiss3d::camera::{ArcBall, Camera};
use kiss3d::light::Light;
use kiss3d::nalgebra::{Point2, Point3, Vector2, Vector3};
use kiss3d::text::Font;
use kiss3d::window::Window;

use crate::options::ViewOptions;
use crate::scene::Scene;

const TEXT_COLOR: [f32; 3] = [0.1, 0.1, 0.1];
const AXIS_COLOR: [f32; 3] = [0.3, 0.3, 0.3];

/// Opens a window and draws the scene until the user closes it.
pub fn show(scene: &Scene, options: &ViewOptions) {
    let (width, height) = options.window_size;
    let mut window = Window::new_with_size(&options.title, width, height);
    window.set_background_color(1.0, 1.0, 1.0);
    window.set_light(Light::StickToCamera);
    window.set_point_size(options.point_size);

    let at = Point3::from(scene.center);
    let distance = scene.extent * 1.5;
    let eye = at + Vector3::new(distance, -distance, distance);
    let mut camera = ArcBall::new(eye, at);
    camera.set_up_axis(Vector3::z());

    let font = Font::default();
    let text_color = Point3::from(TEXT_COLOR);

    log::info!("showing {} points, close the window to continue", scene.vertices.len());

    loop {
        for vertex in &scene.vertices {
            window.draw_point(&Point3::from(vertex.position), &Point3::from(vertex.color));
        }

        for axis in &scene.axes {
            let end = Point3::from(axis.end);
            window.draw_line(&Point3::from(axis.origin), &end, &Point3::from(AXIS_COLOR));
            draw_text_3d(&mut window, &camera, &axis.label, &end, 40.0, &font, &text_color);
        }

        window.draw_text(&options.title, &Point2::new(10.0, 10.0), 50.0, &font, &text_color);

        if !window.render_with_camera(&mut camera) {
            break;
        }
    }
}

// Labels are placed by projecting the 3D anchor into window pixels.
fn draw_text_3d(
    window: &mut Window,
    camera: &dyn Camera,
    text: &str,
    pos: &Point3<f32>,
    scale: f32,
    font: &Rc<Font>,
    color: &Point3<f32>,
) {
    let window_size = Vector2::new(window.size()[0] as f32, window.size()[1] as f32);
    let mut window_coord = camera.project(pos, &window_size);
    if window_coord.x.is_nan() || window_coord.y.is_nan() {
        return;
    }
    window_coord.y = window_size.y - window_coord.y;
    if window_coord.x >= window_size.x
        || window_coord.x < 0.0
        || window_coord.y >= window_size.y
        || window_coord.y < 0.0
    {
        return;
    }
    let scale_factor = window.scale_factor() as f32;
    let coord = Point2::from(window_coord * scale_factor);
    window.draw_text(text, &coord, scale, font, color);
}
