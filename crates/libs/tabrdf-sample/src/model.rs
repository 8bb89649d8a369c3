//! Closed-form reflectance models used to populate sample grids.
use crate::{
    coord::{self, CoordinateSystem},
    grid::SampleGrid,
};
use base::{
    math::{fix_downward_dir, Vec3},
    Origin, Symmetry,
};
use std::fmt::Debug;

mod lambert;
mod ward;

pub use lambert::*;
pub use ward::*;

/// Common interface of analytical reflectance models.
pub trait ReflectanceModel: Send + Sync + Debug {
    /// The name of the model.
    fn name(&self) -> &'static str;

    /// Tells whether the model is invariant under rotation about the normal.
    fn is_isotropic(&self) -> bool;

    /// Returns the symmetry of the model.
    fn symmetry(&self) -> Symmetry {
        if self.is_isotropic() {
            Symmetry::Isotropic
        } else {
            Symmetry::Anisotropic
        }
    }

    /// Evaluates the model for any incident and outgoing direction located
    /// on the upper hemisphere.
    ///
    /// # Arguments
    ///
    /// * `wi` - The incident direction (normalised).
    /// * `wo` - The outgoing direction (normalised).
    fn eval(&self, wi: &Vec3, wo: &Vec3) -> f32;
}

/// Fills every spectrum of the grid with the model evaluated at the direction
/// pair of its cell. The same value is written to every wavelength.
///
/// Outgoing directions pointing below the surface, produced by some
/// coordinate systems near grazing angles, are projected onto the surface
/// plane before evaluation.
pub fn fill_from_model<C, M>(grid: &mut SampleGrid<C>, model: &M)
where
    C: CoordinateSystem,
    M: ReflectanceModel + ?Sized,
{
    log::debug!(
        "Filling {} {} grid of {} cells from {} model",
        grid.symmetry(),
        C::NAME,
        grid.n_cells(),
        model.name()
    );
    if grid.is_isotropic() && !model.is_isotropic() {
        log::warn!(
            "Anisotropic {} model tabulated on an isotropic grid",
            model.name()
        );
    }
    let symmetry = grid.symmetry();
    grid.fill_spectra_with(|angles, spectrum| {
        let (wi, wo) = coord::xyz_from_angles::<C>(symmetry, angles);
        let value = model.eval(&fix_downward_dir(wi), &fix_downward_dir(wo));
        spectrum.fill(value);
    });
    grid.set_origin(Origin::Generated);
}
