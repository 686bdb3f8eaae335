use serde::{Deserialize, Serialize};

use crate::domain::{Capabilities, ChannelChoice, ImageSource};

/// How clipboard text is judged empty before offering the clipboard option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardEmptiness {
    /// Remove at most one literal space, then test the length. Text such as
    /// "\n\n" or "  " counts as non-empty.
    #[default]
    SingleSpace,
    /// Empty when nothing but whitespace remains.
    AnyWhitespace,
}

impl ClipboardEmptiness {
    pub fn is_empty(self, text: &str) -> bool {
        match self {
            ClipboardEmptiness::SingleSpace => text.replacen(' ', "", 1).is_empty(),
            ClipboardEmptiness::AnyWhitespace => text.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    ActionSheet,
    InAppMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMenu {
    pub presentation: Presentation,
    pub options: Vec<ChannelChoice>,
}

impl ChannelMenu {
    pub const CANCEL_INDEX: usize = 0;

    pub fn choice_at(&self, index: usize) -> Option<ChannelChoice> {
        self.options.get(index).copied()
    }

    pub fn offers(&self, choice: ChannelChoice) -> bool {
        self.options.contains(&choice)
    }
}

/// Where a selected option leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRoute {
    Nothing,
    Acquire(ImageSource),
    Clipboard,
}

pub fn build_channel_menu(
    clipboard_text: &str,
    capabilities: &Capabilities,
    emptiness: ClipboardEmptiness,
) -> ChannelMenu {
    let mut options = vec![
        ChannelChoice::Cancel,
        ChannelChoice::TakePhoto,
        ChannelChoice::ChoosePhoto,
    ];
    if !capabilities.has_action_sheet {
        return ChannelMenu {
            presentation: Presentation::InAppMenu,
            options,
        };
    }
    if !emptiness.is_empty(clipboard_text) {
        options.push(ChannelChoice::CopyFromClipboard);
    }
    ChannelMenu {
        presentation: Presentation::ActionSheet,
        options,
    }
}

pub fn route(choice: ChannelChoice) -> ChannelRoute {
    match choice {
        ChannelChoice::Cancel => ChannelRoute::Nothing,
        ChannelChoice::TakePhoto => ChannelRoute::Acquire(ImageSource::Camera),
        ChannelChoice::ChoosePhoto => ChannelRoute::Acquire(ImageSource::Library),
        ChannelChoice::CopyFromClipboard => ChannelRoute::Clipboard,
    }
}
