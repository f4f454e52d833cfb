use serde::Deserialize;

use crate::error::AppError;
use crate::model::Hole;
use crate::mvu::scorecard::{Msg, ReviewChoice};

#[derive(Debug, Deserialize)]
pub struct GolferForm {
    pub golfer: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct StartHoleForm {
    #[serde(default)]
    pub start_hole: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    pub hole: String,
    #[serde(default)]
    pub strokes: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub choice: String,
}

impl From<GolferForm> for Msg {
    fn from(form: GolferForm) -> Self {
        Msg::GolferSelected(form.golfer)
    }
}

impl From<ConfirmForm> for Msg {
    /// Anything but "yes" counts as declining.
    fn from(form: ConfirmForm) -> Self {
        Msg::IdentityConfirmed(form.answer.trim().eq_ignore_ascii_case("yes"))
    }
}

impl From<StartHoleForm> for Msg {
    fn from(form: StartHoleForm) -> Self {
        Msg::StartHoleEntered(form.start_hole)
    }
}

impl TryFrom<ScoreForm> for Msg {
    type Error = AppError;

    fn try_from(form: ScoreForm) -> Result<Self, Self::Error> {
        Ok(Msg::ScoreEntered {
            hole: Hole::from_field_id(&form.hole)?,
            raw: form.strokes,
        })
    }
}

impl TryFrom<ReviewForm> for Msg {
    type Error = AppError;

    fn try_from(form: ReviewForm) -> Result<Self, Self::Error> {
        match form.choice.trim() {
            "fix" => Ok(Msg::ReviewChosen(ReviewChoice::Fix)),
            "ok" => Ok(Msg::ReviewChosen(ReviewChoice::Ok)),
            other => Err(AppError::Validation(format!(
                "review choice must be fix or ok, got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_form_reads_field_id() {
        let msg = Msg::try_from(ScoreForm {
            hole: "11h".into(),
            strokes: "5".into(),
        })
        .unwrap();
        assert!(matches!(msg, Msg::ScoreEntered { hole, ref raw } if hole.number() == 11 && raw == "5"));
        assert!(Msg::try_from(ScoreForm {
            hole: "20h".into(),
            strokes: "5".into(),
        })
        .is_err());
    }

    #[test]
    fn confirm_and_review() {
        assert!(matches!(
            Msg::from(ConfirmForm { answer: "yes".into() }),
            Msg::IdentityConfirmed(true)
        ));
        assert!(matches!(
            Msg::from(ConfirmForm { answer: "no".into() }),
            Msg::IdentityConfirmed(false)
        ));
        assert!(Msg::try_from(ReviewForm { choice: "later".into() }).is_err());
    }
}
