// SPDX-License-Identifier: MPL-2.0
//! Animated loading spinner using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Animated spinner shown while the manifest loads.
///
/// The arc color comes from the active theme at draw time, so the spinner
/// follows a theme toggle without being rebuilt.
pub struct Spinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    size: f32,
}

impl Spinner {
    /// Creates a spinner at the given rotation angle.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let scheme = if matches!(theme, Theme::Light) {
            ColorScheme::light()
        } else {
            ColorScheme::dark()
        };
        let color = scheme.brand_primary;

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Faint full circle underneath the moving arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(Color { a: 0.25, ..color }),
                );

                // Rotating half arc, approximated with short line segments
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
