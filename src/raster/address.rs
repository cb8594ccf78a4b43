//! Logical row to physical address mapping
//!
//! Some panels wire their COM lines in two interleaved halves: logical row 0
//! sits on COM 0, row 1 on the first COM of the second half, row 2 on COM 1 and
//! so on. The mapping is chosen once from the panel configuration so the region
//! writer never needs to know about it.

/// Scan order of a panel's rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    /// Logical row `r` is physical row `r`
    Linear,
    /// Even rows fill the first half, odd rows the second half
    Interleaved {
        /// First physical row of the second half
        half_height: u16,
    },
}

impl PanelVariant {
    /// Interleaved mapping for a panel with `height` physical rows
    ///
    /// An odd height gives the extra row to the even half, which keeps the
    /// mapping a bijection over `0..height`.
    pub const fn interleaved(height: u16) -> Self {
        PanelVariant::Interleaved {
            half_height: height.div_ceil(2),
        }
    }

    /// Physical row for `logical_row`
    ///
    /// Saturates instead of wrapping for a hand-built `half_height` too large
    /// for the row range; [`Self::matches_height`] detects those
    pub const fn to_physical(&self, logical_row: u16) -> u16 {
        match *self {
            PanelVariant::Linear => logical_row,
            PanelVariant::Interleaved { half_height } => {
                if logical_row % 2 == 0 {
                    logical_row / 2
                } else {
                    (logical_row / 2).saturating_add(half_height)
                }
            }
        }
    }

    /// True when this mapping is a bijection over `0..height`
    pub const fn matches_height(&self, height: usize) -> bool {
        match *self {
            PanelVariant::Linear => true,
            PanelVariant::Interleaved { half_height } => {
                half_height as usize == height.div_ceil(2)
            }
        }
    }

    /// Logical row shown on `physical_row`, the inverse of [`Self::to_physical`]
    pub const fn to_logical(&self, physical_row: u16) -> u16 {
        match *self {
            PanelVariant::Linear => physical_row,
            PanelVariant::Interleaved { half_height } => {
                if physical_row < half_height {
                    physical_row.saturating_mul(2)
                } else {
                    (physical_row - half_height).saturating_mul(2).saturating_add(1)
                }
            }
        }
    }
}

/// Location of a pixel row on byte-page hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAddress {
    /// Page index, eight rows per page
    pub page: u16,
    /// Bit inside the page byte, 0 is the top row
    pub bit: u8,
}

/// Page and in-page bit for row `y`
///
/// Compose with [`PanelVariant::to_physical`] by translating the row first.
pub const fn page_address(y: u16) -> PageAddress {
    PageAddress {
        page: y / 8,
        bit: (y % 8) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        for row in 0..64 {
            assert_eq!(PanelVariant::Linear.to_physical(row), row);
            assert_eq!(PanelVariant::Linear.to_logical(row), row);
        }
    }

    #[test]
    fn laowang_interleave() {
        let variant = PanelVariant::interleaved(32);
        assert_eq!(variant, PanelVariant::Interleaved { half_height: 16 });
        assert_eq!(variant.to_physical(0), 0);
        assert_eq!(variant.to_physical(1), 16);
        assert_eq!(variant.to_physical(2), 1);
        assert_eq!(variant.to_physical(3), 17);
        assert_eq!(variant.to_physical(30), 15);
        assert_eq!(variant.to_physical(31), 31);
    }

    #[test]
    fn interleave_is_a_bijection() {
        for height in 1..=64u16 {
            let variant = PanelVariant::interleaved(height);
            let mut seen = [false; 64];
            for row in 0..height {
                let physical = variant.to_physical(row);
                assert!(physical < height, "height={height} row={row}");
                assert!(!seen[physical as usize], "height={height} row={row}");
                seen[physical as usize] = true;
                assert_eq!(variant.to_logical(physical), row);
            }
        }
    }

    #[test]
    fn pages_split_rows_by_eight() {
        assert_eq!(page_address(0), PageAddress { page: 0, bit: 0 });
        assert_eq!(page_address(7), PageAddress { page: 0, bit: 7 });
        assert_eq!(page_address(8), PageAddress { page: 1, bit: 0 });
        assert_eq!(page_address(63), PageAddress { page: 7, bit: 7 });
    }

    #[test]
    fn page_address_composes_with_interleave() {
        let variant = PanelVariant::interleaved(64);
        // logical row 3 lands on physical row 33: page 4, bit 1
        let address = page_address(variant.to_physical(3));
        assert_eq!(address, PageAddress { page: 4, bit: 1 });
    }

    #[test]
    fn mismatched_half_height_is_detected() {
        assert!(PanelVariant::Linear.matches_height(17));
        assert!(PanelVariant::interleaved(32).matches_height(32));
        assert!(PanelVariant::interleaved(33).matches_height(33));
        assert!(!PanelVariant::interleaved(32).matches_height(64));
        assert!(!PanelVariant::Interleaved { half_height: 0 }.matches_height(2));
    }

    #[test]
    fn hand_built_half_height_saturates() {
        let variant = PanelVariant::Interleaved {
            half_height: u16::MAX,
        };
        assert_eq!(variant.to_physical(1), u16::MAX);
        assert_eq!(variant.to_physical(u16::MAX), u16::MAX);
        assert_eq!(variant.to_logical(u16::MAX - 1), u16::MAX);
        assert_eq!(variant.to_logical(u16::MAX), 1);
    }
}
