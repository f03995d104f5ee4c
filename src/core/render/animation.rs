//=========================================================================
// Result Animator
//=========================================================================
//
// Frame-indexed decorative motion: the three result variants and the
// pointer-following effect on the quiz screen.
//
// Every function here is a pure function of (frame, viewport, inputs).
// No state survives between frames, so animations loop forever and can
// restart at any frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::f32::consts::TAU;

//=== External Crates =====================================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::{Color, DisplayList, DrawCommand, Stroke};
use crate::core::layout::{Rect, Viewport};

//=== Constants ===========================================================

/// Seed re-applied every frame so the star field stays in place.
const STAR_SEED: u64 = 1;

/// Vertical anchor of the result animations (pixels from the top).
const ANIMATION_Y: f32 = 350.0;

const PRAISE_COLOR: Color = Color::rgb(255, 150, 0);
const ENCOURAGE_COLOR: Color = Color::rgb(0, 100, 200);
const TRY_AGAIN_COLOR: Color = Color::rgb(200, 50, 0);

//=== ResultVariant =======================================================

/// Presentation chosen for the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVariant {
    /// 80% and above.
    Praise,
    /// 50% up to (not including) 80%.
    Encouragement,
    /// Below 50%.
    TryAgain,
}

impl ResultVariant {
    /// Picks the variant for `score` out of `total`.
    ///
    /// Thresholds are inclusive and evaluated in integer arithmetic so
    /// exactly 80% and exactly 50% land on the higher variant. An empty
    /// quiz counts as 0%.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::TryAgain;
        }
        if score * 5 >= total * 4 {
            Self::Praise
        } else if score * 2 >= total {
            Self::Encouragement
        } else {
            Self::TryAgain
        }
    }

    /// Caption drawn under the animation.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Praise => "Amazing! You're a quiz master!",
            Self::Encouragement => "Nice work! Keep it up!",
            Self::TryAgain => "Keep going! You'll do better next time!",
        }
    }
}

//=== Math Helpers ========================================================

/// Linearly re-maps `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// Not clamped; values outside the input range extrapolate.
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

/// `sin(frame * speed + offset)` computed in f64 so long runs stay smooth.
fn oscillate(frame: u64, speed: f64, offset: f64) -> f32 {
    (frame as f64 * speed + offset).sin() as f32
}

/// Vertices of an `points`-pointed star, alternating outer and inner
/// radius, starting at angle zero.
pub fn star_points(center: (f32, f32), inner: f32, outer: f32, points: usize) -> Vec<(f32, f32)> {
    let step = TAU / points as f32;
    let half = step / 2.0;

    (0..points)
        .flat_map(|k| {
            let a = step * k as f32;
            [
                (center.0 + a.cos() * outer, center.1 + a.sin() * outer),
                (center.0 + (a + half).cos() * inner, center.1 + (a + half).sin() * inner),
            ]
        })
        .collect()
}

/// Rotates `point` about the origin by `angle` (screen space, y down),
/// then translates by `origin`.
fn rotate_about(point: (f32, f32), angle: f32, origin: (f32, f32)) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (
        origin.0 + point.0 * cos - point.1 * sin,
        origin.1 + point.0 * sin + point.1 * cos,
    )
}

/// Number of stars for a praise-level score: 5 at 80%, 50 at 100%,
/// linear in between and rounded up. Computed on the integer ratio so
/// exact scores never land on a float boundary.
pub fn star_count(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    // 5 + (100s/t - 80) * 45/20, over a common denominator of 4t
    (900 * score).saturating_sub(700 * total).div_ceil(4 * total)
}

//=== Result Variants =====================================================

/// Draws the animation and caption for `variant`.
pub fn draw_variant(
    list: &mut DisplayList,
    variant: ResultVariant,
    viewport: Viewport,
    frame: u64,
    score: usize,
    total: usize,
) {
    match variant {
        ResultVariant::Praise => draw_praise(list, viewport, frame, star_count(score, total)),
        ResultVariant::Encouragement => draw_encouragement(list, viewport, frame),
        ResultVariant::TryAgain => draw_try_again(list, viewport, frame),
    }
}

/// Twinkling star field whose density grows with the score.
fn draw_praise(list: &mut DisplayList, viewport: Viewport, frame: u64, stars: usize) {
    let mut rng = StdRng::seed_from_u64(STAR_SEED);

    for i in 0..stars {
        let x = rng.gen::<f32>() * viewport.width;
        let y = rng.gen::<f32>() * viewport.height;
        let size: f32 = rng.gen_range(5.0..15.0);

        let flash = map_range(oscillate(frame, 0.1, i as f64), -1.0, 1.0, 0.0, 255.0);

        list.push(DrawCommand::Polygon {
            points: star_points((x, y), size * 0.4, size, 5),
            fill: Color::rgba(255, 255, 0, flash.round().clamp(0.0, 255.0) as u8),
        });
    }

    list.text(
        ResultVariant::Praise.caption(),
        (viewport.width / 2.0, ANIMATION_Y),
        50.0,
        PRAISE_COLOR,
    );
}

/// Gentle sine wave drifting across the screen.
fn draw_encouragement(list: &mut DisplayList, viewport: Viewport, frame: u64) {
    let drift = frame as f64 * 0.05;

    let mut points = Vec::new();
    let mut x = 0.0_f32;
    while x <= viewport.width {
        let y = ANIMATION_Y + (x as f64 * 0.02 + drift).sin() as f32 * 30.0;
        points.push((x, y));
        x += 10.0;
    }

    list.push(DrawCommand::Polyline {
        points,
        stroke: Stroke {
            color: ENCOURAGE_COLOR,
            width: 5.0,
        },
    });

    list.text(
        ResultVariant::Encouragement.caption(),
        (viewport.width / 2.0, ANIMATION_Y),
        40.0,
        ENCOURAGE_COLOR,
    );
}

/// Slowly rotating arrow pointing onward.
fn draw_try_again(list: &mut DisplayList, viewport: Viewport, frame: u64) {
    let angle = (frame as f64 * 0.02) as f32;
    let origin = (viewport.width / 2.0, ANIMATION_Y);

    let points = [(-20.0, 0.0), (20.0, 0.0), (0.0, -50.0)]
        .into_iter()
        .map(|p| rotate_about(p, angle, origin))
        .collect();

    list.push(DrawCommand::Polygon {
        points,
        fill: TRY_AGAIN_COLOR,
    });

    list.text(
        ResultVariant::TryAgain.caption(),
        (viewport.width / 2.0, ANIMATION_Y + 100.0),
        40.0,
        TRY_AGAIN_COLOR,
    );
}

//=== Pointer Effect ======================================================

/// Pulsing halo that follows the cursor while answering.
pub fn draw_cursor_effect(list: &mut DisplayList, position: (f32, f32), frame: u64) {
    let pulse = map_range(oscillate(frame, 0.1, 0.0), -1.0, 1.0, 10.0, 25.0);
    let (x, y) = position;

    list.push(DrawCommand::Ellipse {
        rect: Rect::from_center(x, y, pulse, pulse),
        fill: Color::rgba(255, 150, 0, 150),
    });
    list.push(DrawCommand::Ellipse {
        rect: Rect::from_center(x, y, 10.0, 10.0),
        fill: Color::rgba(255, 255, 255, 100),
    });
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn polygons(list: &DisplayList) -> Vec<&DrawCommand> {
        list.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .collect()
    }

    //=====================================================================
    // Variant Selection
    //=====================================================================

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(ResultVariant::from_score(8, 10), ResultVariant::Praise);
        assert_eq!(ResultVariant::from_score(4, 5), ResultVariant::Praise);
        assert_eq!(ResultVariant::from_score(10, 10), ResultVariant::Praise);

        assert_eq!(ResultVariant::from_score(5, 10), ResultVariant::Encouragement);
        assert_eq!(ResultVariant::from_score(1, 2), ResultVariant::Encouragement);
        assert_eq!(ResultVariant::from_score(7, 10), ResultVariant::Encouragement);

        assert_eq!(ResultVariant::from_score(4, 10), ResultVariant::TryAgain);
        assert_eq!(ResultVariant::from_score(0, 3), ResultVariant::TryAgain);
    }

    #[test]
    fn just_below_thresholds_drop_a_variant() {
        // 79/100 and 49/100
        assert_eq!(ResultVariant::from_score(79, 100), ResultVariant::Encouragement);
        assert_eq!(ResultVariant::from_score(49, 100), ResultVariant::TryAgain);
    }

    #[test]
    fn empty_quiz_is_try_again() {
        assert_eq!(ResultVariant::from_score(0, 0), ResultVariant::TryAgain);
    }

    //=====================================================================
    // Helpers
    //=====================================================================

    #[test]
    fn map_range_is_linear() {
        assert_eq!(map_range(0.0, -1.0, 1.0, 10.0, 20.0), 15.0);
        assert_eq!(map_range(-1.0, -1.0, 1.0, 0.0, 255.0), 0.0);
        assert_eq!(map_range(1.0, -1.0, 1.0, 0.0, 255.0), 255.0);
    }

    #[test]
    fn star_count_spans_five_to_fifty() {
        assert_eq!(star_count(4, 5), 5);
        assert_eq!(star_count(8, 10), 5);
        assert_eq!(star_count(10, 10), 50);
        assert_eq!(star_count(9, 10), 28);
    }

    #[test]
    fn star_count_is_exact_for_awkward_totals() {
        // 12/15 and 28/35 are not exact in binary floating point
        assert_eq!(star_count(12, 15), 5);
        assert_eq!(star_count(28, 35), 5);
        // 14/15 = 93.33%: 5 + 13.33 * 2.25 = 35.0 exactly
        assert_eq!(star_count(14, 15), 35);
        assert_eq!(star_count(13, 15), 20);
    }

    #[test]
    fn star_count_bottoms_out_at_zero() {
        assert_eq!(star_count(0, 10), 0);
        assert_eq!(star_count(7, 10), 0);
        assert_eq!(star_count(0, 0), 0);
    }

    #[test]
    fn star_has_alternating_radii() {
        let points = star_points((0.0, 0.0), 4.0, 10.0, 5);
        assert_eq!(points.len(), 10);

        for (i, (x, y)) in points.iter().enumerate() {
            let r = (x * x + y * y).sqrt();
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((r - expected).abs() < 1e-4, "Vertex {i} radius {r}");
        }
        assert!((points[0].0 - 10.0).abs() < 1e-4 && points[0].1.abs() < 1e-4);
    }

    //=====================================================================
    // Variants
    //=====================================================================

    #[test]
    fn praise_star_field_is_stable_across_frames() {
        let mut first = DisplayList::new();
        let mut later = DisplayList::new();
        draw_variant(&mut first, ResultVariant::Praise, viewport(), 1, 10, 10);
        draw_variant(&mut later, ResultVariant::Praise, viewport(), 500, 10, 10);

        let positions = |list: &DisplayList| -> Vec<Vec<(f32, f32)>> {
            polygons(list)
                .into_iter()
                .filter_map(|c| match c {
                    DrawCommand::Polygon { points, .. } => Some(points.clone()),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(positions(&first).len(), 50);
        assert_eq!(positions(&first), positions(&later), "Stars must not move");
    }

    #[test]
    fn praise_stars_stay_on_screen() {
        let mut list = DisplayList::new();
        draw_variant(&mut list, ResultVariant::Praise, viewport(), 1, 10, 10);

        for command in polygons(&list) {
            if let DrawCommand::Polygon { points, .. } = command {
                let cx = points.iter().map(|p| p.0).sum::<f32>() / points.len() as f32;
                let cy = points.iter().map(|p| p.1).sum::<f32>() / points.len() as f32;
                assert!((-15.0..=815.0).contains(&cx) && (-15.0..=615.0).contains(&cy));
            }
        }
    }

    #[test]
    fn praise_density_follows_score() {
        let mut low = DisplayList::new();
        draw_variant(&mut low, ResultVariant::Praise, viewport(), 1, 4, 5);
        assert_eq!(polygons(&low).len(), 5);
        assert_eq!(low.texts().last(), Some(ResultVariant::Praise.caption()));
    }

    #[test]
    fn encouragement_wave_spans_width_and_moves() {
        let mut a = DisplayList::new();
        let mut b = DisplayList::new();
        draw_variant(&mut a, ResultVariant::Encouragement, viewport(), 1, 6, 10);
        draw_variant(&mut b, ResultVariant::Encouragement, viewport(), 40, 6, 10);

        let wave = |list: &DisplayList| match &list.commands()[0] {
            DrawCommand::Polyline { points, .. } => points.clone(),
            other => panic!("Expected polyline, got {:?}", other),
        };

        let points = wave(&a);
        assert_eq!(points.len(), 81, "0..=800 step 10");
        assert_eq!(points.first().unwrap().0, 0.0);
        assert_eq!(points.last().unwrap().0, 800.0);
        assert!(points.iter().all(|(_, y)| (y - 350.0).abs() <= 30.0 + 1e-3));
        assert_ne!(points, wave(&b), "Wave drifts with the frame count");
    }

    #[test]
    fn try_again_arrow_rotates_about_anchor() {
        let mut a = DisplayList::new();
        let mut b = DisplayList::new();
        draw_variant(&mut a, ResultVariant::TryAgain, viewport(), 0, 1, 10);
        draw_variant(&mut b, ResultVariant::TryAgain, viewport(), 50, 1, 10);

        let arrow = |list: &DisplayList| match &list.commands()[0] {
            DrawCommand::Polygon { points, .. } => points.clone(),
            other => panic!("Expected polygon, got {:?}", other),
        };

        let still = arrow(&a);
        assert!((still[2].0 - 400.0).abs() < 1e-3 && (still[2].1 - 300.0).abs() < 1e-3);

        let turned = arrow(&b);
        assert_ne!(still, turned);
        for (x, y) in turned {
            let r = ((x - 400.0).powi(2) + (y - 350.0).powi(2)).sqrt();
            assert!(r <= 50.0 + 1e-3, "Arrow vertices stay within its radius");
        }
        assert_eq!(a.texts().last(), Some(ResultVariant::TryAgain.caption()));
    }

    //=====================================================================
    // Pointer Effect
    //=====================================================================

    #[test]
    fn cursor_effect_pulses_between_ten_and_twenty_five() {
        for frame in 0..200 {
            let mut list = DisplayList::new();
            draw_cursor_effect(&mut list, (30.0, 40.0), frame);
            assert_eq!(list.len(), 2);

            match &list.commands()[0] {
                DrawCommand::Ellipse { rect, .. } => {
                    assert!(rect.w >= 10.0 - 1e-3 && rect.w <= 25.0 + 1e-3);
                    assert_eq!((rect.cx, rect.cy), (30.0, 40.0));
                }
                other => panic!("Expected ellipse, got {:?}", other),
            }
        }
    }
}
