//! Spinning cube primitive
//!
//! A flat-shaded, perspective-projected cube drawn with iced's Canvas. The
//! scene mirrors a small 3D hero: a 2×2×2 box at the origin, a camera six
//! units back with a 75° vertical field of view, half-strength ambient light
//! and one point light up and to the right.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use std::f32::consts::TAU;
use std::time::Instant;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, color, mouse};

/// Radians per second on both axes
pub const SPIN_RATE: f32 = 0.5;
/// Default cube color
pub const CUBE_COLOR: Color = color!(0x2563eb);

const CAMERA_Z: f32 = 6.0;
const FOV_Y_DEGREES: f32 = 75.0;
const AMBIENT: f32 = 0.5;
const LIGHT: Vec3 = [10.0, 10.0, 10.0];
/// Longest frame gap folded into one rotation step
const MAX_STEP_SECS: f32 = 0.1;

type Vec3 = [f32; 3];

const VERTICES: [Vec3; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Corner indices (counter-clockwise seen from outside) and outward normal
const FACES: [([usize; 4], Vec3); 6] = [
    ([4, 5, 6, 7], [0.0, 0.0, 1.0]),
    ([1, 0, 3, 2], [0.0, 0.0, -1.0]),
    ([5, 1, 2, 6], [1.0, 0.0, 0.0]),
    ([0, 4, 7, 3], [-1.0, 0.0, 0.0]),
    ([7, 6, 2, 3], [0.0, 1.0, 0.0]),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
];

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len > f32::EPSILON {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

/// Y rotation, then X rotation (Euler XYZ order)
fn rotate(v: Vec3, rotation_x: f32, rotation_y: f32) -> Vec3 {
    let (sy, cy) = rotation_y.sin_cos();
    let v = [v[0] * cy + v[2] * sy, v[1], -v[0] * sy + v[2] * cy];
    let (sx, cx) = rotation_x.sin_cos();
    [v[0], v[1] * cx - v[2] * sx, v[1] * sx + v[2] * cx]
}

fn project(v: Vec3, size: Size) -> Point {
    let focal = (size.height / 2.0) / (FOV_Y_DEGREES.to_radians() / 2.0).tan();
    let depth = (CAMERA_Z - v[2]).max(f32::EPSILON);
    Point::new(
        size.width / 2.0 + v[0] * focal / depth,
        size.height / 2.0 - v[1] * focal / depth,
    )
}

/// One visible face, ready to fill
#[derive(Debug, Clone, PartialEq)]
pub struct ShadedFace {
    pub corners: [Point; 4],
    /// Light factor in `0.0..=1.0`
    pub brightness: f32,
    /// Distance from the camera to the face center
    pub depth: f32,
}

/// Visible faces for a rotation, farthest first
pub fn shaded_faces(rotation_x: f32, rotation_y: f32, size: Size) -> Vec<ShadedFace> {
    let camera = [0.0, 0.0, CAMERA_Z];
    let rotated: Vec<Vec3> = VERTICES
        .iter()
        .map(|v| rotate(*v, rotation_x, rotation_y))
        .collect();

    let mut faces: Vec<ShadedFace> = FACES
        .iter()
        .filter_map(|(indices, normal)| {
            let normal = rotate(*normal, rotation_x, rotation_y);
            let center = indices.iter().fold([0.0; 3], |acc, &i| {
                let v = rotated[i];
                [acc[0] + v[0] / 4.0, acc[1] + v[1] / 4.0, acc[2] + v[2] / 4.0]
            });

            let to_camera = sub(camera, center);
            if dot(normal, to_camera) <= 0.0 {
                return None;
            }

            let diffuse = dot(normal, normalize(sub(LIGHT, center))).max(0.0);
            Some(ShadedFace {
                corners: (*indices).map(|i| project(rotated[i], size)),
                brightness: (AMBIENT + diffuse).min(1.0),
                depth: dot(to_camera, to_camera).sqrt(),
            })
        })
        .collect();

    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

/// Rotation state advanced on animation frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CubeState {
    pub rotation_x: f32,
    pub rotation_y: f32,
    last_frame: Option<Instant>,
}

impl CubeState {
    /// Spin by the time elapsed since the previous frame
    pub fn advance(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let step = now
                .saturating_duration_since(last)
                .as_secs_f32()
                .min(MAX_STEP_SECS)
                * SPIN_RATE;
            self.rotation_x = (self.rotation_x + step) % TAU;
            self.rotation_y = (self.rotation_y + step) % TAU;
        }
        self.last_frame = Some(now);
    }

    /// Stop counting time; the next frame resumes without a jump
    pub fn pause(&mut self) {
        self.last_frame = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.last_frame.is_some()
    }
}

/// Cube drawing configuration
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub color: Color,
    pub edge_color: Color,
}

impl Cube {
    pub fn new(state: &CubeState) -> Self {
        Self {
            rotation_x: state.rotation_x,
            rotation_y: state.rotation_y,
            color: CUBE_COLOR,
            edge_color: Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    }
}

impl<Message> Program<Message> for Cube {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for face in shaded_faces(self.rotation_x, self.rotation_y, bounds.size()) {
            let path = Path::new(|builder| {
                builder.move_to(face.corners[0]);
                for corner in &face.corners[1..] {
                    builder.line_to(*corner);
                }
                builder.close();
            });

            let shade = Color {
                r: self.color.r * face.brightness,
                g: self.color.g * face.brightness,
                b: self.color.b * face.brightness,
                a: self.color.a,
            };
            frame.fill(&path, shade);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(self.edge_color),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create a cube canvas element
pub fn view_cube<'a, Message: 'a>(cube: Cube, height: impl Into<Length>) -> Element<'a, Message> {
    Canvas::new(cube).width(Length::Fill).height(height).into()
}
