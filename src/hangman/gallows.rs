//! What the gallows drawing should show.
//!
//! Drawing itself belongs to the presentation layer. This module only
//! answers "which style" and "which parts, given this many misses".

use serde::{Deserialize, Serialize};

/// Which of the two gallows drawings to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GallowsStyle {
    /// Single post with a crossbar.
    #[default]
    Standard,
    /// Two posts, top and middle crossbars, rope centered.
    Alternative,
}

impl GallowsStyle {
    /// The other style.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            GallowsStyle::Standard => GallowsStyle::Alternative,
            GallowsStyle::Alternative => GallowsStyle::Standard,
        }
    }
}

/// Figure parts, in the order misses add them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    /// Crossed-out eyes, drawn together with the last limb.
    CrossedEyes,
}

impl BodyPart {
    /// Limbs in drawing order. One per miss.
    pub const STAGES: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Body,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Parts to draw after `attempts` misses.
    ///
    /// ```
    /// use rule_games::hangman::BodyPart;
    ///
    /// assert_eq!(BodyPart::visible(2), vec![BodyPart::Head, BodyPart::Body]);
    /// assert_eq!(BodyPart::visible(6).last(), Some(&BodyPart::CrossedEyes));
    /// ```
    #[must_use]
    pub fn visible(attempts: u32) -> Vec<BodyPart> {
        let shown = (attempts as usize).min(Self::STAGES.len());
        let mut parts = Self::STAGES[..shown].to_vec();
        if shown == Self::STAGES.len() {
            parts.push(BodyPart::CrossedEyes);
        }
        parts
    }
}
