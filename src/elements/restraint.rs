//! Boundary-condition restraint patterns

use serde::{Deserialize, Serialize};

/// Degree-of-freedom restraints at a node
///
/// Each flag is true when the corresponding DOF is restrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restraint {
    /// Restrained in X translation
    pub dx: bool,
    /// Restrained in Y translation
    pub dy: bool,
    /// Restrained in Z translation
    pub dz: bool,
    /// Restrained in X rotation
    pub rx: bool,
    /// Restrained in Y rotation
    pub ry: bool,
    /// Restrained in Z rotation
    pub rz: bool,
}

impl Restraint {
    /// Create a fully free restraint (no DOFs restrained)
    pub fn free() -> Self {
        Self::default()
    }

    /// Create a fully fixed restraint (all DOFs restrained)
    pub fn fixed() -> Self {
        Self {
            dx: true,
            dy: true,
            dz: true,
            rx: true,
            ry: true,
            rz: true,
        }
    }

    /// Create a pinned restraint (translations restrained, rotations free)
    pub fn pinned() -> Self {
        Self {
            dx: true,
            dy: true,
            dz: true,
            ..Self::default()
        }
    }

    /// Create a roller restraint (X translation restrained only)
    pub fn roller_x() -> Self {
        Self {
            dx: true,
            ..Self::default()
        }
    }

    /// Create a roller restraint (Y translation restrained only)
    pub fn roller_y() -> Self {
        Self {
            dy: true,
            ..Self::default()
        }
    }

    /// Create a roller restraint (Z translation restrained only)
    pub fn roller_z() -> Self {
        Self {
            dz: true,
            ..Self::default()
        }
    }

    /// Create a restraint with specific DOF flags
    pub fn with_restraints(dx: bool, dy: bool, dz: bool, rx: bool, ry: bool, rz: bool) -> Self {
        Self {
            dx,
            dy,
            dz,
            rx,
            ry,
            rz,
        }
    }

    /// Get list of restrained DOF indices (0-5)
    pub fn restrained_dofs(&self) -> Vec<usize> {
        let mut dofs = Vec::new();
        if self.dx { dofs.push(0); }
        if self.dy { dofs.push(1); }
        if self.dz { dofs.push(2); }
        if self.rx { dofs.push(3); }
        if self.ry { dofs.push(4); }
        if self.rz { dofs.push(5); }
        dofs
    }

    /// Get list of free DOF indices (0-5)
    pub fn free_dofs(&self) -> Vec<usize> {
        let mut dofs = Vec::new();
        if !self.dx { dofs.push(0); }
        if !self.dy { dofs.push(1); }
        if !self.dz { dofs.push(2); }
        if !self.rx { dofs.push(3); }
        if !self.ry { dofs.push(4); }
        if !self.rz { dofs.push(5); }
        dofs
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.dx || self.dy || self.dz || self.rx || self.ry || self.rz
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.restrained_dofs().len()
    }
}

impl Default for Restraint {
    fn default() -> Self {
        Self {
            dx: false,
            dy: false,
            dz: false,
            rx: false,
            ry: false,
            rz: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_restraint() {
        let restraint = Restraint::free();
        assert!(!restraint.is_supported());
        assert_eq!(restraint.num_restrained(), 0);
        assert_eq!(restraint.free_dofs(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fixed_restraint() {
        let restraint = Restraint::fixed();
        assert!(restraint.dx && restraint.dy && restraint.dz);
        assert!(restraint.rx && restraint.ry && restraint.rz);
        assert_eq!(restraint.num_restrained(), 6);
    }

    #[test]
    fn test_pinned_restraint() {
        let restraint = Restraint::pinned();
        assert!(restraint.dx && restraint.dy && restraint.dz);
        assert!(!restraint.rx && !restraint.ry && !restraint.rz);
        assert_eq!(restraint.restrained_dofs(), vec![0, 1, 2]);
    }

    #[test]
    fn test_roller_restraints() {
        assert_eq!(Restraint::roller_x().restrained_dofs(), vec![0]);
        assert_eq!(Restraint::roller_y().restrained_dofs(), vec![1]);
        assert_eq!(Restraint::roller_z().restrained_dofs(), vec![2]);
    }
}
