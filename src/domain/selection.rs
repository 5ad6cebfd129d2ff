// Channel-card selection state
use crate::domain::records::Channel;

/// Per-channel click counters backing the follower chart's series picker.
///
/// Clicking a card only ever selects. Counters are monotonically
/// non-decreasing and there is no deselect transition, so a channel stays
/// selected for the rest of the process once clicked; a second click leaves
/// its counter at 2, still selected. The interaction is a one-way latch, not
/// a toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSelection {
    clicks: [u32; Channel::ALL.len()],
}

impl ChannelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A card click increments the channel's counter by exactly one.
    pub fn record_click(&mut self, channel: Channel) {
        self.clicks[channel.index()] += 1;
    }

    pub fn click_count(&self, channel: Channel) -> u32 {
        self.clicks[channel.index()]
    }

    /// Selection is derived from the full counter vector at read time, not
    /// from a separate flag.
    pub fn is_selected(&self, channel: Channel) -> bool {
        self.click_count(channel) > 0
    }

    /// Channels clicked at least once, in canonical order.
    pub fn selected(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|channel| self.is_selected(*channel))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_selected_initially() {
        let selection = ChannelSelection::new();
        assert!(selection.selected().is_empty());
        assert!(!selection.is_selected(Channel::LinkedIn));
    }

    #[test]
    fn test_click_selects_channel() {
        let mut selection = ChannelSelection::new();
        selection.record_click(Channel::LinkedIn);
        assert!(selection.is_selected(Channel::LinkedIn));
        assert_eq!(selection.selected(), vec![Channel::LinkedIn]);
    }

    #[test]
    fn test_second_click_does_not_deselect() {
        let mut selection = ChannelSelection::new();
        selection.record_click(Channel::Twitter);
        selection.record_click(Channel::Twitter);
        assert_eq!(selection.click_count(Channel::Twitter), 2);
        assert!(selection.is_selected(Channel::Twitter));
    }

    #[test]
    fn test_selected_follows_canonical_order() {
        let mut selection = ChannelSelection::new();
        selection.record_click(Channel::Facebook);
        selection.record_click(Channel::LinkedIn);
        assert_eq!(
            selection.selected(),
            vec![Channel::LinkedIn, Channel::Facebook]
        );
    }
}
