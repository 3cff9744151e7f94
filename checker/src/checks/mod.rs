//! Check strategies, one module per assignment-kind family.

pub mod bounds_check;
pub mod crs_check;
pub mod equality_check;
pub mod operations_check;
pub mod plot_check;
pub mod scalar_check;
pub mod sequence_check;
pub mod shape_check;
pub mod table_check;

use crate::traits::check::Check;
use util::assignment::AssignmentKind;

/// Selects the check strategy for an assignment kind.
pub fn check_for(kind: &AssignmentKind) -> Box<dyn Check> {
    match kind {
        AssignmentKind::Integer { .. }
        | AssignmentKind::Float { .. }
        | AssignmentKind::Text { .. } => Box::new(scalar_check::ScalarCheck),
        AssignmentKind::Sequence { .. } => Box::new(sequence_check::SequenceCheck),
        AssignmentKind::SequenceEquals { .. } => Box::new(equality_check::EqualityCheck),
        AssignmentKind::Operations { .. } => Box::new(operations_check::OperationsCheck),
        AssignmentKind::Table { .. } => Box::new(table_check::TableCheck),
        AssignmentKind::Crs { .. } => Box::new(crs_check::CrsCheck),
        AssignmentKind::Bounds { .. } => Box::new(bounds_check::BoundsCheck),
        AssignmentKind::Shape { .. } => Box::new(shape_check::ShapeCheck),
        AssignmentKind::Plot { .. } => Box::new(plot_check::PlotCheck),
    }
}
