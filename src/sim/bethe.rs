use clap::ValueEnum;

use super::SimError;

/// Electron mass (MeV/c²).
pub const ELECTRON_MASS: f64 = 0.511;
/// K = 4π N_A r_e² m_e c² (MeV cm²/mol).
pub const K: f64 = 0.307;

// ---------------------------------------------------------------------------
// Targets and projectiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    /// Atomic number.
    pub z: u32,
    /// Atomic mass.
    pub a: u32,
    /// Density (g/cm³).
    pub density: f64,
    /// Mean excitation energy (eV).
    pub excitation_ev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Material {
    Aluminum,
    Copper,
}

impl Material {
    pub fn props(self) -> MaterialProps {
        match self {
            Material::Aluminum => MaterialProps {
                z: 13,
                a: 27,
                density: 2.7,
                excitation_ev: 166.0,
            },
            Material::Copper => MaterialProps {
                z: 29,
                a: 63,
                density: 8.96,
                excitation_ev: 322.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileProps {
    /// Charge in units of e.
    pub z: u32,
    /// Rest mass (MeV/c²).
    pub mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Projectile {
    Proton,
    Alpha,
    Muon,
}

impl Projectile {
    pub fn props(self) -> ProjectileProps {
        match self {
            Projectile::Proton => ProjectileProps { z: 1, mass: 938.272 },
            Projectile::Alpha => ProjectileProps { z: 2, mass: 3727.379 },
            Projectile::Muon => ProjectileProps { z: 1, mass: 105.658 },
        }
    }
}

// ---------------------------------------------------------------------------
// Bethe-Bloch
// ---------------------------------------------------------------------------

/// Maximum energy transfer to a free electron in a single collision (MeV).
fn max_energy_transfer(beta2: f64, gamma: f64, gamma2: f64, mass_ratio: f64) -> f64 {
    (2.0 * ELECTRON_MASS * beta2 * gamma2)
        / (1.0 + 2.0 * gamma * mass_ratio + mass_ratio * mass_ratio)
}

/// Linear stopping power -dE/dx (MeV/cm) at kinetic energy `kinetic` (MeV).
///
/// Clamped at zero: at low energies the logarithm goes negative and the
/// formula stops being physical.
pub fn stopping_power(kinetic: f64, target: &MaterialProps, projectile: &ProjectileProps) -> f64 {
    if kinetic <= 0.0 {
        return 0.0;
    }

    let gamma = (kinetic + projectile.mass) / projectile.mass;
    let gamma2 = gamma * gamma;
    let beta2 = 1.0 - 1.0 / gamma2;
    let mass_ratio = ELECTRON_MASS / projectile.mass;
    let w_max = max_energy_transfer(beta2, gamma, gamma2, mass_ratio);

    let z_inc = f64::from(projectile.z);
    // I is in eV; 1e-12 brings I² to MeV².
    let i2 = target.excitation_ev * target.excitation_ev * 1.0e-12;
    let log_term = 0.5 * ((2.0 * ELECTRON_MASS * beta2 * gamma2 * w_max) / i2).ln();
    let mass_stopping = (K * z_inc * z_inc * f64::from(target.z))
        / (f64::from(target.a) * beta2)
        * (log_term - beta2);

    (target.density * mass_stopping).max(0.0)
}

// ---------------------------------------------------------------------------
// Stepping through the target
// ---------------------------------------------------------------------------

/// One row of simulation output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Depth into the target (cm).
    pub distance: f64,
    /// Kinetic energy at that depth (MeV).
    pub kinetic_energy: f64,
    /// Stopping power at that depth (MeV/cm).
    pub stopping_power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// MeV.
    pub initial_energy: f64,
    /// cm.
    pub thickness: f64,
    /// Signed so that a negative count reaches [`SimParams::validate`].
    pub steps: i64,
}

impl SimParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.initial_energy.is_nan() || self.initial_energy <= 0.0 {
            return Err(SimError::NonPositiveEnergy);
        }
        if self.steps <= 0 {
            return Err(SimError::NonPositiveSteps);
        }
        if self.thickness.is_nan() || self.thickness <= 0.0 {
            return Err(SimError::NonPositiveThickness);
        }
        Ok(())
    }

    pub fn step(&self) -> f64 {
        self.thickness / self.steps as f64
    }
}

/// Walk the projectile through the target in `steps` equal slabs.
///
/// Each sample is taken at the entrance of its slab; the energy lost across
/// the slab is subtracted before the next one. Once the stopping power clamps
/// to zero the projectile is below the formula's range and counts as stopped.
///
/// Samples are produced lazily, so memory use does not grow with `steps`.
pub fn simulate(
    params: &SimParams,
    target: &MaterialProps,
    projectile: &ProjectileProps,
) -> Result<Simulation, SimError> {
    params.validate()?;
    log::info!(
        "Simulating {} steps of {:.6} cm from {:.6} MeV",
        params.steps,
        params.step(),
        params.initial_energy
    );

    Ok(Simulation {
        target: *target,
        projectile: *projectile,
        step: params.step(),
        steps: params.steps,
        next: 0,
        kinetic: params.initial_energy,
    })
}

/// Iterator over the samples of one run, see [`simulate`].
#[derive(Debug, Clone)]
pub struct Simulation {
    target: MaterialProps,
    projectile: ProjectileProps,
    step: f64,
    steps: i64,
    next: i64,
    kinetic: f64,
}

impl Iterator for Simulation {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.steps {
            return None;
        }

        let sp = stopping_power(self.kinetic, &self.target, &self.projectile);
        let sample = Sample {
            distance: self.next as f64 * self.step,
            kinetic_energy: self.kinetic,
            stopping_power: sp,
        };

        self.kinetic = if sp > 0.0 {
            (self.kinetic - sp * self.step).max(0.0)
        } else {
            0.0
        };
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
