// MIT/Apache2 License

use super::Surface;
use crate::FillRule;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        (**self).begin_path()
    }
    #[inline]
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result {
        (**self).move_to(x, y)
    }
    #[inline]
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result {
        (**self).line_to(x, y)
    }
    #[inline]
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> crate::Result {
        (**self).quadratic_curve_to(cx, cy, x, y)
    }
    #[inline]
    fn bezier_curve_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> crate::Result {
        (**self).bezier_curve_to(c1x, c1y, c2x, c2y, x, y)
    }
    #[inline]
    fn close_path(&mut self) -> crate::Result {
        (**self).close_path()
    }
    #[inline]
    fn is_point_in_path(&self, x: f64, y: f64, rule: FillRule) -> crate::Result<bool> {
        (**self).is_point_in_path(x, y, rule)
    }
}
