// Sprite placement on the 2D canvas

use glam::Vec2;

/// Scale applied to sprite images when drawn
pub const SPRITE_SCALE: f32 = 0.5;

/// Screen-space rectangle a sprite is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl SpriteRect {
    /// Scale an image of `width` x `height` and center it on `center`
    pub fn centered(center: Vec2, width: u32, height: u32, scale: f32) -> Self {
        let size = Vec2::new(width as f32, height as f32) * scale;
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centered_half_scale() {
        let rect = SpriteRect::centered(Vec2::new(350.0, 350.0), 200, 100, SPRITE_SCALE);
        assert_relative_eq!(rect.size.x, 100.0);
        assert_relative_eq!(rect.size.y, 50.0);
        assert_relative_eq!(rect.min.x, 300.0);
        assert_relative_eq!(rect.min.y, 325.0);
        assert_relative_eq!(rect.max().x, 400.0);
    }

    #[test]
    fn test_unscaled_rect_straddles_center() {
        let center = Vec2::new(-100.0, 350.0);
        let rect = SpriteRect::centered(center, 64, 64, 1.0);
        assert_eq!(rect.min, Vec2::new(-132.0, 318.0));
        assert_eq!(rect.max(), Vec2::new(-68.0, 382.0));
    }
}
