use crate::core::data::complex_rect::PanDirection;

/// One user action on an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    /// Moves the view by a quarter of its extent times the speed.
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    NextScheme,
    NextVariant,
    DoubleIterations,
    HalveIterations,
    /// Moves the start point, or Julia parameter, by the speed. `Up` raises
    /// the imaginary part.
    NudgeStart(PanDirection),
    ResetStart,
    FasterSpeed,
    SlowerSpeed,
    MoreSamples,
    FewerSamples,
    ToggleRenderMode,
}

impl ExplorerCommand {
    /// Whether the command leaves previously sampled pixels wrong.
    #[must_use]
    pub const fn invalidates_frame(self) -> bool {
        !matches!(
            self,
            Self::FasterSpeed | Self::SlowerSpeed | Self::MoreSamples
        )
    }
}
