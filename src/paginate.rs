use crate::geometry::{BOXES_PER_PAGE, COLUMNS_PER_PAGE};
use crate::model::{PrintUnit, Selection, Slot};

/// Row-major slot allocator for a single generation run.
///
/// Pages are opened on demand: a page only exists once a unit has been placed on it,
/// so a run never ends with a trailing blank page.
#[derive(Debug)]
pub struct Paginator {
    current_page: u32,
    placed: usize,
    row: usize,
    column: usize,
}

/// Where a unit went, and whether it opened a new page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub slot: Slot,
    pub starts_page: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            placed: 0,
            row: 0,
            column: 0,
        }
    }

    pub fn place(&mut self) -> Placement {
        let mut starts_page = self.placed == 0;
        if self.placed > 0 && self.placed % BOXES_PER_PAGE == 0 {
            self.current_page += 1;
            self.row = 0;
            self.column = 0;
            starts_page = true;
        }

        let slot = Slot {
            page: self.current_page,
            row: self.row,
            column: self.column,
        };

        self.column += 1;
        if self.column == COLUMNS_PER_PAGE {
            self.column = 0;
            self.row += 1;
        }
        self.placed += 1;

        Placement { slot, starts_page }
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Pages opened so far; zero before the first placement.
    pub fn total_pages(&self) -> u32 {
        if self.placed == 0 { 0 } else { self.current_page }
    }
}

/// Expand selections into physical labels: selection order first, then copy index
/// ascending within each selection.
pub fn expand(selections: &[Selection]) -> impl Iterator<Item = PrintUnit<'_>> {
    selections.iter().flat_map(|sel| {
        (1..=sel.quantity()).map(move |copy_index| PrintUnit {
            item: &sel.item,
            copy_index,
        })
    })
}

/// Assign a slot to every unit of `selections`, in order.
pub fn paginate(selections: &[Selection]) -> (Vec<(PrintUnit<'_>, Placement)>, u32) {
    let mut paginator = Paginator::new();
    let placed: Vec<_> = expand(selections)
        .map(|unit| (unit, paginator.place()))
        .collect();
    (placed, paginator.total_pages())
}
