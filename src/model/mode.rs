//! One timing configuration and its derived clocks.

use bitflags::bitflags;

bitflags! {
    /// Mode sync/scan flags, with the RandR bit values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModeFlags: u16 {
        const HSYNC_POSITIVE = 1;
        const HSYNC_NEGATIVE = 2;
        const VSYNC_POSITIVE = 4;
        const VSYNC_NEGATIVE = 8;
        const INTERLACE = 16;
        const DOUBLE_SCAN = 32;
        const CSYNC = 64;
        const CSYNC_POSITIVE = 128;
        const CSYNC_NEGATIVE = 256;
    }
}

/// One mode line of the report. Every timing field is independently
/// optional: the compact format carries only name/size/refresh, the verbose
/// format carries the full horizontal and vertical groups.
///
/// Frequencies are stored in Hz (the report's MHz/KHz suffixes are scaled
/// at extraction time).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mode {
    pub name: Option<String>,
    /// Hex mode id, e.g. `0x47`.
    pub id: Option<u32>,
    /// Pixel clock in Hz.
    pub dotclock: Option<f64>,
    pub flags: Option<ModeFlags>,
    pub current: bool,
    pub preferred: bool,

    pub width: Option<u32>,
    pub h_sync_start: Option<u32>,
    pub h_sync_end: Option<u32>,
    pub h_total: Option<u32>,
    pub h_skew: Option<u32>,
    /// Explicit horizontal clock in Hz, when the report printed one.
    /// Overrides the derived value in [`Mode::horizontal_clock`].
    pub h_clock: Option<f64>,

    pub height: Option<u32>,
    pub v_sync_start: Option<u32>,
    pub v_sync_end: Option<u32>,
    pub v_total: Option<u32>,
    /// Explicit refresh rate in Hz, when the report printed one.
    /// Overrides the derived value in [`Mode::refresh_rate`].
    pub refresh: Option<f64>,
}

impl Mode {
    /// Horizontal clock in Hz.
    ///
    /// An explicit [`Mode::h_clock`] wins. Otherwise the value is derived as
    /// `dotclock / h_total`; `None` when either input is unknown, and
    /// `Some(0.0)` when both are known but the total is exactly zero (a
    /// degenerate measurement, distinct from "unknown").
    pub fn horizontal_clock(&self) -> Option<f64> {
        if self.h_clock.is_some() {
            return self.h_clock;
        }
        let dotclock = self.dotclock?;
        let h_total = self.h_total?;
        if h_total == 0 {
            return Some(0.0);
        }
        Some(dotclock / f64::from(h_total))
    }

    /// Refresh rate in Hz.
    ///
    /// An explicit [`Mode::refresh`] wins. Otherwise the value is derived as
    /// `dotclock / (h_total * v_total)`, with the vertical total doubled
    /// under `DOUBLE_SCAN` and halved under `INTERLACE`. `None` when any
    /// input is unknown; `Some(0.0)` when all are known but a total is
    /// exactly zero.
    pub fn refresh_rate(&self) -> Option<f64> {
        if self.refresh.is_some() {
            return self.refresh;
        }
        let dotclock = self.dotclock?;
        let h_total = self.h_total?;
        let v_total = self.v_total?;
        if h_total == 0 {
            return Some(0.0);
        }
        let mut v_total = f64::from(v_total);
        if let Some(flags) = self.flags {
            if flags.contains(ModeFlags::DOUBLE_SCAN) {
                v_total *= 2.0;
            }
            if flags.contains(ModeFlags::INTERLACE) {
                v_total /= 2.0;
            }
        }
        if v_total == 0.0 {
            return Some(0.0);
        }
        Some(dotclock / (f64::from(h_total) * v_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> Mode {
        Mode {
            dotclock: Some(148_500_000.0),
            h_total: Some(2080),
            v_total: Some(1125),
            flags: Some(ModeFlags::empty()),
            ..Mode::default()
        }
    }

    #[test]
    fn refresh_derived_from_totals() {
        let mode = full_hd();
        let expected = 148_500_000.0 / (2080.0 * 1125.0);
        assert_eq!(mode.refresh_rate(), Some(expected));
        assert_eq!(mode.horizontal_clock(), Some(148_500_000.0 / 2080.0));
    }

    #[test]
    fn explicit_values_override_derivation() {
        let mut mode = full_hd();
        mode.refresh = Some(60.0);
        mode.h_clock = Some(67_500.0);
        assert_eq!(mode.refresh_rate(), Some(60.0));
        assert_eq!(mode.horizontal_clock(), Some(67_500.0));
    }

    #[test]
    fn unknown_inputs_give_unknown() {
        let mut mode = full_hd();
        mode.h_total = None;
        assert_eq!(mode.horizontal_clock(), None);
        assert_eq!(mode.refresh_rate(), None);

        let mut mode = full_hd();
        mode.dotclock = None;
        assert_eq!(mode.horizontal_clock(), None);
        assert_eq!(mode.refresh_rate(), None);

        let mut mode = full_hd();
        mode.v_total = None;
        assert_eq!(mode.refresh_rate(), None);
        // Horizontal clock does not depend on the vertical total.
        assert!(mode.horizontal_clock().is_some());
    }

    #[test]
    fn zero_total_is_the_zero_sentinel() {
        let mut mode = full_hd();
        mode.h_total = Some(0);
        assert_eq!(mode.horizontal_clock(), Some(0.0));
        assert_eq!(mode.refresh_rate(), Some(0.0));

        let mut mode = full_hd();
        mode.v_total = Some(0);
        assert_eq!(mode.refresh_rate(), Some(0.0));
    }

    #[test]
    fn interlace_and_doublescan_adjust_vertical_total() {
        let mut mode = full_hd();
        mode.flags = Some(ModeFlags::INTERLACE);
        let expected = 148_500_000.0 / (2080.0 * (1125.0 / 2.0));
        assert_eq!(mode.refresh_rate(), Some(expected));

        let mut mode = full_hd();
        mode.flags = Some(ModeFlags::DOUBLE_SCAN);
        let expected = 148_500_000.0 / (2080.0 * (1125.0 * 2.0));
        assert_eq!(mode.refresh_rate(), Some(expected));
    }

    #[test]
    fn flags_absent_means_no_adjustment() {
        let mut mode = full_hd();
        mode.flags = None;
        let expected = 148_500_000.0 / (2080.0 * 1125.0);
        assert_eq!(mode.refresh_rate(), Some(expected));
    }
}
