// SPDX-License-Identifier: MPL-2.0
//! Ambient particle field drawn behind the gallery.
//!
//! A fixed pool of drifting dots with connecting lines between close
//! neighbors. The pool lives in application state and is advanced by the
//! animation tick; drawing resolves colors from the active theme so a
//! theme switch retints the field without reseeding it.

use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use rand::Rng;
use std::f32::consts::TAU;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 80;

/// Drift speed in pixels per tick.
const DRIFT_SPEED: f32 = 0.8;

/// Maximum distance at which two particles are linked by a line.
const LINK_DISTANCE: f32 = 150.0;

/// Opacity oscillates within [0.1, 0.8].
const OPACITY_MID: f32 = 0.45;
const OPACITY_AMPLITUDE: f32 = 0.35;

/// Radians the oscillation clock advances per tick.
const OSCILLATION_STEP: f32 = 0.03;

#[derive(Debug, Clone)]
struct Particle {
    position: Point,
    velocity: Vector,
    radius: f32,
    /// Phase offset so particles do not pulse in unison.
    phase: f32,
    /// Index into the theme's dot palette.
    color_index: usize,
}

impl Particle {
    fn opacity(&self, clock: f32) -> f32 {
        OPACITY_MID + OPACITY_AMPLITUDE * (clock + self.phase).sin()
    }
}

/// The particle pool plus its draw cache.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Size,
    clock: f32,
    cache: Cache,
}

impl ParticleField {
    /// Seeds a new field with random positions and headings within `bounds`.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        let mut rng = rand::rng();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let heading = rng.random_range(0.0..TAU);
                Particle {
                    position: Point::new(
                        rng.random_range(0.0..bounds.width.max(1.0)),
                        rng.random_range(0.0..bounds.height.max(1.0)),
                    ),
                    velocity: Vector::new(
                        DRIFT_SPEED * heading.cos(),
                        DRIFT_SPEED * heading.sin(),
                    ),
                    radius: rng.random_range(1.0..4.0),
                    phase: rng.random_range(0.0..TAU),
                    color_index: rng.random_range(0..usize::MAX),
                }
            })
            .collect();

        Self {
            particles,
            bounds,
            clock: 0.0,
            cache: Cache::default(),
        }
    }

    /// Advances every particle by one tick, bouncing at the edges.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.position = particle.position + particle.velocity;

            if particle.position.x <= 0.0 || particle.position.x >= self.bounds.width {
                particle.velocity.x = -particle.velocity.x;
                particle.position.x = particle.position.x.clamp(0.0, self.bounds.width);
            }
            if particle.position.y <= 0.0 || particle.position.y >= self.bounds.height {
                particle.velocity.y = -particle.velocity.y;
                particle.position.y = particle.position.y.clamp(0.0, self.bounds.height);
            }
        }

        self.clock += OSCILLATION_STEP;
        self.cache.clear();
    }

    /// Adopts a new window size, keeping existing particles inside it.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
        for particle in &mut self.particles {
            particle.position.x = particle.position.x.clamp(0.0, bounds.width);
            particle.position.y = particle.position.y.clamp(0.0, bounds.height);
        }
        self.cache.clear();
    }

    #[cfg(test)]
    fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.particles.iter().map(|p| p.position)
    }
}

impl<Message> canvas::Program<Message> for ParticleField {
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
        let palette = scheme.particles;

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                // Link lines first so dots draw on top of them
                for (i, a) in self.particles.iter().enumerate() {
                    for b in &self.particles[i + 1..] {
                        let dx = a.position.x - b.position.x;
                        let dy = a.position.y - b.position.y;
                        if dx * dx + dy * dy < LINK_DISTANCE * LINK_DISTANCE {
                            let line = Path::line(a.position, b.position);
                            frame.stroke(
                                &line,
                                Stroke::default().with_width(1.0).with_color(palette.link),
                            );
                        }
                    }
                }

                for particle in &self.particles {
                    let base = palette.dots[particle.color_index % palette.dots.len()];
                    let dot = Path::circle(particle.position, particle.radius);
                    frame.fill(
                        &dot,
                        Color {
                            a: particle.opacity(self.clock),
                            ..base
                        },
                    );
                }
            });

        vec![geometry]
    }
}
