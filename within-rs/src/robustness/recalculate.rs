use anyhow::{Result, bail};
use num_traits::Zero;

use crate::error::WithinError;
use crate::geometry::Coordinate;
use crate::geometry::primitives::{Linestring, Point, Polygon, Rect, Ring};
use crate::robustness::RescalePolicy;

/// Trait for geometries that can be mapped through a [`RescalePolicy`] into a geometry of the same shape.
pub trait Recalculate<P> {
    type Output;

    /// Writes the mapped coordinates into `output`, which must already have the shape of `self`.
    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()>;

    /// Returns a new geometry holding the mapped coordinates.
    fn recalculate(&self, policy: &P) -> Result<Self::Output>;
}

impl<T, P, const D: usize> Recalculate<P> for Point<T, D>
where
    T: Coordinate,
    P: RescalePolicy<T, D>,
{
    type Output = Point<P::Robust, D>;

    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()> {
        for d in 0..D {
            output.0[d] = policy.try_apply(d, self.get(d))?;
        }
        Ok(())
    }

    fn recalculate(&self, policy: &P) -> Result<Self::Output> {
        let mut output = Point([P::Robust::zero(); D]);
        self.recalculate_into(&mut output, policy)?;
        Ok(output)
    }
}

impl<T, P, const D: usize> Recalculate<P> for Rect<T, D>
where
    T: Coordinate,
    P: RescalePolicy<T, D>,
{
    type Output = Rect<P::Robust, D>;

    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()> {
        self.min.recalculate_into(&mut output.min, policy)?;
        self.max.recalculate_into(&mut output.max, policy)
    }

    fn recalculate(&self, policy: &P) -> Result<Self::Output> {
        Ok(Rect {
            min: self.min.recalculate(policy)?,
            max: self.max.recalculate(policy)?,
        })
    }
}

fn recalculate_points_into<T, P>(points: &[Point<T>], output: &mut [Point<P::Robust>], policy: &P) -> Result<()>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    if points.len() != output.len() {
        bail!(WithinError::ShapeMismatch {
            expected: points.len(),
            actual: output.len(),
        });
    }
    for (p, out) in points.iter().zip(output.iter_mut()) {
        p.recalculate_into(out, policy)?;
    }
    Ok(())
}

fn recalculate_points<T, P>(points: &[Point<T>], policy: &P) -> Result<Vec<Point<P::Robust>>>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    points.iter().map(|p| p.recalculate(policy)).collect()
}

impl<T, P> Recalculate<P> for Linestring<T>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    type Output = Linestring<P::Robust>;

    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()> {
        recalculate_points_into(self.points(), &mut output.0, policy)
    }

    fn recalculate(&self, policy: &P) -> Result<Self::Output> {
        Ok(Linestring::new(recalculate_points(self.points(), policy)?))
    }
}

impl<T, P> Recalculate<P> for Ring<T>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    type Output = Ring<P::Robust>;

    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()> {
        recalculate_points_into(self.points(), &mut output.points, policy)
    }

    fn recalculate(&self, policy: &P) -> Result<Self::Output> {
        Ok(Ring::new(recalculate_points(self.points(), policy)?))
    }
}

impl<T, P> Recalculate<P> for Polygon<T>
where
    T: Coordinate,
    P: RescalePolicy<T, 2>,
{
    type Output = Polygon<P::Robust>;

    fn recalculate_into(&self, output: &mut Self::Output, policy: &P) -> Result<()> {
        if self.interiors.len() != output.interiors.len() {
            bail!(WithinError::ShapeMismatch {
                expected: self.interiors.len(),
                actual: output.interiors.len(),
            });
        }
        self.exterior.recalculate_into(&mut output.exterior, policy)?;
        for (hole, out) in self.interiors.iter().zip(output.interiors.iter_mut()) {
            hole.recalculate_into(out, policy)?;
        }
        Ok(())
    }

    fn recalculate(&self, policy: &P) -> Result<Self::Output> {
        let exterior = self.exterior.recalculate(policy)?;
        let interiors = self
            .interiors
            .iter()
            .map(|hole| hole.recalculate(policy))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}
