use glam::DVec2;

const PI: f64 = std::f64::consts::PI;
const TAU: f64 = std::f64::consts::TAU;

/// Direction from `start` towards `target`, in `[0, 2π)`.
///
/// With `top_origin_up` the angle grows counter-clockwise in a y-up frame.
/// Without it the result is reflected into the y-down canvas frame.
pub fn directional_angle(start: DVec2, target: DVec2, top_origin_up: bool) -> f64 {
    let angle = if start.x == target.x {
        if start.y < target.y {
            PI / 2.
        } else if start.y > target.y {
            3. * PI / 2.
        } else {
            0.
        }
    } else if start.x < target.x {
        ((target.y - start.y) / (target.x - start.x)).atan()
    } else {
        PI + ((target.y - start.y) / (target.x - start.x)).atan()
    };

    let angle = (angle + TAU) % TAU;

    if top_origin_up {
        angle
    } else {
        (TAU - angle) % TAU
    }
}

pub fn distance(a: DVec2, b: DVec2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
