//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let draft_error = DraftError::from(json_error);

        match draft_error {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let draft_error = DraftError::from(io_error);

        match draft_error {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "seven".parse::<u32>().unwrap_err();
        let draft_error = DraftError::from(parse_error);

        match draft_error {
            DraftError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_question_mark_operator() {
        fn parse_round(s: &str) -> Result<u32> {
            Ok(s.parse::<u32>()?)
        }

        assert_eq!(parse_round("3").unwrap(), 3);
        assert!(matches!(
            parse_round("x"),
            Err(DraftError::InvalidNumber(_))
        ));
    }
}

#[cfg(test)]
mod error_display_tests {
    use super::*;

    #[test]
    fn test_missing_league_file_display() {
        let error = DraftError::MissingLeagueFile {
            env_var: "DRAFT_ASSIST_LEAGUE_FILE".to_string(),
            default_path: "/tmp/league.json".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("DRAFT_ASSIST_LEAGUE_FILE"));
        assert!(msg.contains("/tmp/league.json"));
    }

    #[test]
    fn test_duplicate_team_display() {
        let error = DraftError::DuplicateTeam { team: 4 };
        assert_eq!(
            error.to_string(),
            "Team 4 appears more than once in the draft order"
        );
    }

    #[test]
    fn test_unknown_team_display() {
        let error = DraftError::UnknownTeam { team: 26 };
        assert_eq!(error.to_string(), "Team 26 is not in the draft order");
    }

    #[test]
    fn test_invalid_sigma_display() {
        let error = DraftError::InvalidSigma { value: 0.0 };
        assert!(error.to_string().contains("must be finite and > 0"));
    }

    #[test]
    fn test_empty_order_and_round_display() {
        assert_eq!(DraftError::EmptyDraftOrder.to_string(), "Draft order is empty");
        assert_eq!(
            DraftError::InvalidRound { round: 0 }.to_string(),
            "Invalid round: 0 (rounds start at 1)"
        );
    }

    #[test]
    fn test_no_remaining_pick_display() {
        let error = DraftError::NoRemainingPick { team: 5 };
        assert_eq!(error.to_string(), "Team 5 has no remaining pick on the board");
    }

    #[test]
    fn test_missing_turn_info_display() {
        assert!(DraftError::MissingTurnInfo
            .to_string()
            .contains("--picks-until-turn"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = DraftError::EmptyDraftOrder;
        assert!(format!("{:?}", error).contains("EmptyDraftOrder"));
    }
}
