// SPDX-License-Identifier: MPL-2.0
//! Sparkle bursts shown when a card is hovered.
//!
//! Bursts live in one pool keyed by card index; each card renders a
//! transparent canvas layer over its surface that draws only its own
//! sparkles. Coordinates are card-local, so the burst follows the card
//! through grid reflow and scrolling.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Frame, Geometry, Text};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme, Vector};
use rand::Rng;
use std::time::Duration;

/// Glyphs a burst picks from.
const GLYPHS: [&str; 5] = ["✨", "⭐", "💫", "✦", "★"];

/// Sparkles spawned per burst.
const BURST_SIZE: usize = 5;

/// How long one sparkle lives.
const LIFETIME: Duration = Duration::from_secs(1);

/// Vertical rise over a full lifetime, in pixels.
const RISE_DISTANCE: f32 = 30.0;

/// Sparkles spawn across the top strip of the card.
const SPAWN_HEIGHT: f32 = 50.0;

#[derive(Debug, Clone)]
struct Sparkle {
    card_index: usize,
    glyph: &'static str,
    /// Card-local spawn position.
    origin: Point,
    font_size: f32,
    age: Duration,
}

impl Sparkle {
    /// Lifetime progress in [0, 1].
    fn progress(&self) -> f32 {
        self.age.as_secs_f32() / LIFETIME.as_secs_f32()
    }
}

/// Pool of live sparkles across all cards.
#[derive(Debug, Default)]
pub struct SparklePool {
    sparkles: Vec<Sparkle>,
}

impl SparklePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a burst over the card at `card_index`.
    pub fn spawn_burst(&mut self, card_index: usize) {
        let mut rng = rand::rng();

        for _ in 0..BURST_SIZE {
            self.sparkles.push(Sparkle {
                card_index,
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                origin: Point::new(
                    rng.random_range(0.0..sizing::CARD_WIDTH),
                    rng.random_range(0.0..SPAWN_HEIGHT),
                ),
                font_size: rng.random_range(10.0..20.0),
                age: Duration::ZERO,
            });
        }
    }

    /// Ages every sparkle by `elapsed` and drops the expired ones.
    pub fn tick(&mut self, elapsed: Duration) {
        for sparkle in &mut self.sparkles {
            sparkle.age += elapsed;
        }
        self.sparkles.retain(|sparkle| sparkle.age < LIFETIME);
    }

    /// True while any sparkle is alive; gates the animation tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.sparkles.is_empty()
    }

    /// Canvas layer drawing this card's sparkles.
    #[must_use]
    pub fn layer(&self, card_index: usize) -> SparkleLayer<'_> {
        SparkleLayer {
            pool: self,
            card_index,
        }
    }
}

/// Per-card view into the pool. Drawn fresh every frame; bursts are short
/// enough that caching buys nothing.
#[derive(Debug)]
pub struct SparkleLayer<'a> {
    pool: &'a SparklePool,
    card_index: usize,
}

impl<Message> canvas::Program<Message> for SparkleLayer<'_> {
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

        for sparkle in &self.pool.sparkles {
            if sparkle.card_index != self.card_index {
                continue;
            }

            let progress = sparkle.progress();
            let position = sparkle.origin + Vector::new(0.0, -RISE_DISTANCE * progress);

            frame.fill_text(Text {
                content: sparkle.glyph.to_string(),
                position,
                color: Color {
                    a: 1.0 - progress,
                    ..Color::WHITE
                },
                size: sparkle.font_size.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_is_idle() {
        let pool = SparklePool::new();
        assert!(!pool.is_active());
    }

    #[test]
    fn burst_spawns_five_sparkles() {
        let mut pool = SparklePool::new();
        pool.spawn_burst(0);

        assert_eq!(pool.sparkles.len(), BURST_SIZE);
        assert!(pool.is_active());
    }

    #[test]
    fn sparkles_spawn_in_the_card_top_strip() {
        let mut pool = SparklePool::new();
        pool.spawn_burst(2);

        for sparkle in &pool.sparkles {
            assert!(sparkle.origin.x >= 0.0 && sparkle.origin.x <= sizing::CARD_WIDTH);
            assert!(sparkle.origin.y >= 0.0 && sparkle.origin.y <= SPAWN_HEIGHT);
            assert!(sparkle.font_size >= 10.0 && sparkle.font_size <= 20.0);
            assert!(GLYPHS.contains(&sparkle.glyph));
        }
    }

    #[test]
    fn sparkles_expire_after_their_lifetime() {
        let mut pool = SparklePool::new();
        pool.spawn_burst(0);

        pool.tick(Duration::from_millis(500));
        assert!(pool.is_active());

        pool.tick(Duration::from_millis(600));
        assert!(!pool.is_active());
    }

    #[test]
    fn bursts_on_different_cards_age_independently() {
        let mut pool = SparklePool::new();
        pool.spawn_burst(0);
        pool.tick(Duration::from_millis(700));
        pool.spawn_burst(3);

        pool.tick(Duration::from_millis(400));

        // First burst expired, second still alive
        assert!(pool.sparkles.iter().all(|s| s.card_index == 3));
        assert!(pool.is_active());
    }

    #[test]
    fn progress_tracks_age() {
        let mut pool = SparklePool::new();
        pool.spawn_burst(0);
        pool.tick(Duration::from_millis(250));

        for sparkle in &pool.sparkles {
            assert!((sparkle.progress() - 0.25).abs() < 1e-3);
        }
    }
}
