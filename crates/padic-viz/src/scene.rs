//! Frames for the renderer.
//!
//! A [`Transition`] captures where every moving value starts and ends during
//! one tick. Sampling it at `t ∈ [0, 1]` gives a [`Frame`]: a flat list of
//! dots and optional gradient links that a canvas can draw without knowing
//! anything about p-adic numbers.

use padic_geometry::Point2D;
use rayon::prelude::*;
use serde::Serialize;

use crate::bubble::Motion;
use crate::color::{Palette, Rgb};
use crate::layout::Layout;

/// A dot to draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dot {
    /// Integer whose orbit this dot belongs to; selects the colour.
    pub origin: u64,
    /// Value the dot is heading to (or leaving, if it vanishes).
    pub value: u64,
    /// Position.
    pub position: Point2D,
    /// Fill colour.
    pub color: Rgb,
    /// Radius.
    pub radius: f64,
}

/// A line between the dots of consecutive integers, stroked with a two-stop gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Link {
    /// Start point.
    pub from: Point2D,
    /// End point.
    pub to: Point2D,
    /// Gradient stops at `from` and `to`.
    pub gradient: [Rgb; 2],
}

/// Everything drawn at one instant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Frame {
    /// Tick the frame belongs to.
    pub tick: u64,
    /// Progress through the tick, in `[0, 1]`.
    pub progress: f64,
    /// Dots, ordered by origin.
    pub dots: Vec<Dot>,
    /// Links, empty unless connection is enabled.
    pub links: Vec<Link>,
}

#[derive(Clone, Debug)]
struct Track {
    motion: Motion,
    start: Point2D,
    end: Option<Point2D>,
    color: Rgb,
}

/// The animation of one tick.
#[derive(Clone, Debug)]
pub struct Transition {
    tick: u64,
    tracks: Vec<Track>,
    dot_radius: f64,
    connect: bool,
}

impl Transition {
    /// Lays out every motion's endpoints.
    #[must_use]
    pub fn new(
        tick: u64,
        motions: Vec<Motion>,
        layout: &Layout,
        palette: &Palette,
        dot_radius: f64,
        connect: bool,
    ) -> Self {
        let tracks = motions
            .into_par_iter()
            .map(|motion| Track {
                motion,
                start: layout.position(motion.from),
                end: motion.to.map(|to| layout.position(to)),
                color: palette.color(motion.origin),
            })
            .collect();
        Self {
            tick,
            tracks,
            dot_radius,
            connect,
        }
    }

    /// The tick this transition animates.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of moving values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if nothing moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Values that vanish during this tick.
    #[must_use]
    pub fn vanished(&self) -> usize {
        self.tracks.iter().filter(|t| t.end.is_none()).count()
    }

    /// Samples the transition at progress `t` (clamped, smoothstep eased).
    ///
    /// Vanishing values stay in place and shrink to nothing.
    #[must_use]
    pub fn frame(&self, t: f64) -> Frame {
        let progress = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let eased = smoothstep(progress);

        let dots: Vec<Dot> = self
            .tracks
            .iter()
            .map(|track| match track.end {
                Some(end) => Dot {
                    origin: track.motion.origin,
                    value: track.motion.to.unwrap_or(track.motion.from),
                    position: track.start.lerp(end, eased),
                    color: track.color,
                    radius: self.dot_radius,
                },
                None => Dot {
                    origin: track.motion.origin,
                    value: track.motion.from,
                    position: track.start,
                    color: track.color,
                    radius: self.dot_radius * (1.0 - eased),
                },
            })
            .collect();

        let links = if self.connect {
            link_consecutive(&self.tracks, &dots)
        } else {
            Vec::new()
        };

        Frame {
            tick: self.tick,
            progress,
            dots,
            links,
        }
    }
}

/// Joins the first surviving dot of each origin to that of the next origin.
fn link_consecutive(tracks: &[Track], dots: &[Dot]) -> Vec<Link> {
    let mut heads: Vec<&Dot> = Vec::new();
    for (track, dot) in tracks.iter().zip(dots) {
        if track.end.is_none() {
            continue;
        }
        if heads.last().map_or(true, |head| head.origin != dot.origin) {
            heads.push(dot);
        }
    }

    heads
        .windows(2)
        .filter(|pair| pair[1].origin == pair[0].origin + 1)
        .map(|pair| Link {
            from: pair[0].position,
            to: pair[1].position,
            gradient: [pair[0].color, pair[1].color],
        })
        .collect()
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VizConfig;

    fn fixture(connect: bool) -> (Layout, Palette, Vec<Motion>) {
        let config = VizConfig::default().with_max_int(3).with_connect(connect);
        let layout = Layout::new(&config).unwrap();
        let palette = Palette::new(4, 1.0, 1.0);
        let motions = vec![
            Motion { origin: 0, from: 0, to: Some(1) },
            Motion { origin: 1, from: 1, to: Some(2) },
            Motion { origin: 2, from: 2, to: None },
            Motion { origin: 3, from: 3, to: Some(10) },
        ];
        (layout, palette, motions)
    }

    #[test]
    fn test_endpoints() {
        let (layout, palette, motions) = fixture(false);
        let transition = Transition::new(1, motions, &layout, &palette, 3.0, false);
        assert_eq!(transition.len(), 4);
        assert_eq!(transition.vanished(), 1);

        let start = transition.frame(0.0);
        let end = transition.frame(1.0);
        assert!(start.dots[0].position.distance(layout.position(0)) < 1e-9);
        assert!(end.dots[0].position.distance(layout.position(1)) < 1e-9);
        assert!(end.dots[3].position.distance(layout.position(10)) < 1e-9);
        assert!(start.links.is_empty());
    }

    #[test]
    fn test_vanishing_dot_shrinks() {
        let (layout, palette, motions) = fixture(false);
        let transition = Transition::new(1, motions, &layout, &palette, 3.0, false);
        assert_eq!(transition.frame(0.0).dots[2].radius, 3.0);
        assert_eq!(transition.frame(0.5).dots[2].radius, 1.5);
        assert_eq!(transition.frame(1.0).dots[2].radius, 0.0);
        assert_eq!(transition.frame(1.0).dots[2].value, 2);
    }

    #[test]
    fn test_progress_clamped() {
        let (layout, palette, motions) = fixture(false);
        let transition = Transition::new(7, motions, &layout, &palette, 3.0, false);
        assert_eq!(transition.frame(-1.0).progress, 0.0);
        assert_eq!(transition.frame(2.0).progress, 1.0);
        assert_eq!(transition.frame(f64::NAN).progress, 0.0);
        assert_eq!(transition.frame(0.3).tick, 7);
    }

    #[test]
    fn test_links_skip_vanished() {
        let (layout, palette, motions) = fixture(true);
        let transition = Transition::new(1, motions, &layout, &palette, 3.0, true);
        let frame = transition.frame(1.0);
        // 0→1 linked; 2 vanished so neither 1→2 nor 2→3
        assert_eq!(frame.links.len(), 1);
        assert_eq!(frame.links[0].gradient, [palette.color(0), palette.color(1)]);
        assert!(frame.links[0].to.distance(frame.dots[1].position) < 1e-9);
    }

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(1.0), 1.0);
    }
}
