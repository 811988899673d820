use crate::config::ImageDescriptor;
use crate::error::GalleryError;

// Two fixed row sets, five rows each. Odd columns are shifted one row unit so
// tile seams never line up across neighbouring columns.
const EVEN_ROW_OFFSETS: [i32; 5] = [-4, -2, 0, 2, 4];
const ODD_ROW_OFFSETS: [i32; 5] = [-3, -1, 1, 3, 5];
pub const ROWS_PER_COLUMN: usize = 5;
const TILE_SPAN: i32 = 2;

/// A tile's static slot on the sphere. Built once per gallery instance and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub column_offset: i32,
    pub row_offset: i32,
    pub span_x: i32,
    pub span_y: i32,
    pub source: String,
    pub alt_text: String,
}

/// Lay the image list out on the staggered sphere lattice.
///
/// Columns are generated left to right with offsets centred at zero; each
/// column carries one of the two row sets depending on parity. Images are
/// cycled round-robin over the slots, then a stable forward pass swaps away
/// generation-adjacent duplicate sources where a distinct image exists later.
pub fn build_placements(
    images: &[ImageDescriptor],
    segments: u32,
) -> Result<Vec<TilePlacement>, GalleryError> {
    if images.is_empty() {
        return Err(GalleryError::Configuration("image list is empty".into()));
    }
    if segments == 0 {
        return Err(GalleryError::Configuration(
            "segments must be at least 1".into(),
        ));
    }

    let slot_count = segments as usize * ROWS_PER_COLUMN;
    let mut assigned: Vec<&ImageDescriptor> =
        (0..slot_count).map(|i| &images[i % images.len()]).collect();

    // Swap adjacent duplicates forward; stable, so the layout is deterministic.
    for i in 1..assigned.len() {
        if assigned[i].source == assigned[i - 1].source {
            if let Some(j) = (i + 1..assigned.len()).find(|&j| assigned[j].source != assigned[i].source)
            {
                assigned.swap(i, j);
            }
        }
    }

    let mut placements = Vec::with_capacity(slot_count);
    for c in 0..segments {
        let column_offset = c as i32 - (segments / 2) as i32;
        let rows = if c % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        for &row_offset in rows {
            let img = assigned[placements.len()];
            placements.push(TilePlacement {
                column_offset,
                row_offset,
                span_x: TILE_SPAN,
                span_y: TILE_SPAN,
                source: img.source.clone(),
                alt_text: img.alt_text.clone(),
            });
        }
    }
    Ok(placements)
}
