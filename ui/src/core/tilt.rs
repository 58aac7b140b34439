//! Pointer-driven tilt for the technology showcase panel.

/// Total rotation swept across the panel, in degrees (±20° around neutral).
pub const ROTATION_SPAN_DEG: f64 = 40.0;

/// Orientation of the tilt panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    /// Flat, facing the viewer.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Map a pointer position inside the panel to an orientation.
    ///
    /// The pointer's normalized offset from the panel center (±0.5 on each
    /// axis) scales to ±20°. The X rotation is inverted so pushing the
    /// pointer toward the top edge tilts that edge away from the viewer.
    /// The mapping is stateless; every move event replaces the whole
    /// rotation, and only the explicit leave reset returns it to neutral.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Self::neutral();
        }
        Self {
            x_deg: ((y / height) - 0.5) * -ROTATION_SPAN_DEG,
            y_deg: ((x / width) - 0.5) * ROTATION_SPAN_DEG,
        }
    }

    /// Transform value for the panel's style attribute.
    pub fn css_transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.x_deg, self.y_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_center_is_neutral() {
        let rotation = Rotation::from_pointer(128.0, 128.0, 256.0, 256.0);
        assert_eq!(rotation, Rotation::neutral());
    }

    #[test]
    fn top_left_corner_tilts_up_and_left() {
        let rotation = Rotation::from_pointer(0.0, 0.0, 256.0, 256.0);
        assert_eq!(rotation.y_deg, -20.0);
        assert_eq!(rotation.x_deg, 20.0);
    }

    #[test]
    fn bottom_right_corner_tilts_down_and_right() {
        let rotation = Rotation::from_pointer(256.0, 256.0, 256.0, 256.0);
        assert_eq!(rotation.y_deg, 20.0);
        assert_eq!(rotation.x_deg, -20.0);
    }

    #[test]
    fn angles_stay_in_band_inside_the_panel() {
        for &(x, y) in &[(0.0, 0.0), (64.0, 192.0), (255.0, 1.0), (128.0, 0.0)] {
            let rotation = Rotation::from_pointer(x, y, 256.0, 256.0);
            assert!(rotation.x_deg.abs() <= ROTATION_SPAN_DEG / 2.0);
            assert!(rotation.y_deg.abs() <= ROTATION_SPAN_DEG / 2.0);
        }
    }

    #[test]
    fn mapping_is_stateless() {
        let a = Rotation::from_pointer(40.0, 70.0, 200.0, 100.0);
        let b = Rotation::from_pointer(40.0, 70.0, 200.0, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_bounds_collapse_to_neutral() {
        assert_eq!(Rotation::from_pointer(10.0, 10.0, 0.0, 256.0), Rotation::neutral());
        assert_eq!(Rotation::from_pointer(10.0, 10.0, 256.0, f64::NAN), Rotation::neutral());
    }

    #[test]
    fn transform_string_carries_both_axes() {
        let rotation = Rotation::from_pointer(0.0, 0.0, 256.0, 256.0);
        assert_eq!(rotation.css_transform(), "rotateX(20deg) rotateY(-20deg)");
        assert_eq!(Rotation::neutral().css_transform(), "rotateX(0deg) rotateY(0deg)");
    }
}
