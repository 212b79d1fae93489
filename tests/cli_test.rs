#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::cli::{render_board, Input, MatchEnd, PlayOptions, Terminal, OPPONENT};
    use broadside::{coord_label, Board, Orientation, ShipType};

    fn terminal(script: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn all_cells() -> String {
        let mut script = String::new();
        for r in 0..10 {
            for c in 0..10 {
                script.push_str(&coord_label((r, c)));
                script.push('\n');
            }
        }
        script
    }

    fn run(script: &str, options: PlayOptions) -> String {
        let mut term = terminal(script);
        term.run(options).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_classifies_input() {
        let mut term = terminal("  b7 \nxxx\n");
        assert_eq!(term.prompt("> ").unwrap(), Input::Line("b7".to_string()));
        assert_eq!(term.prompt("> ").unwrap(), Input::Restart);
        assert_eq!(term.prompt("> ").unwrap(), Input::Eof);
    }

    #[test]
    fn test_full_match_with_fixed_seed() {
        let options = PlayOptions {
            seed: Some(12345),
            auto_place: true,
            reveal_ai: false,
        };
        let mut term = terminal(&all_cells());
        let end = term.play_match(options, 0).unwrap();
        assert!(matches!(end, MatchEnd::Finished(_)));

        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("Final boards:"));
        let ai_won = format!("{} wins!", OPPONENT);
        assert!(out.contains("You win!") || out.contains(&ai_won));
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let options = PlayOptions {
            seed: Some(77),
            auto_place: true,
            reveal_ai: true,
        };
        let script = all_cells();
        assert_eq!(run(&script, options), run(&script, options));
    }

    #[test]
    fn test_restart_then_quit() {
        let out = run("XXX\n", PlayOptions::default());
        assert!(out.contains("Restarting game..."));
        assert_eq!(out.matches("Auto-place your ships?").count(), 2);
    }

    #[test]
    fn test_manual_placement_reprompts() {
        let options = PlayOptions {
            seed: Some(2),
            ..PlayOptions::default()
        };
        let out = run("n\nZ9H\nA1H\nA1V\nB1H\nC1H\nD1H\nE1H\n", options);
        assert!(out.contains("Invalid input"));
        assert!(out.contains("Invalid placement: Ship placement overlaps with another ship."));
        assert_eq!(out.matches("Place your Battleship").count(), 2);
        assert!(out.contains("Your shot"));
    }

    #[test]
    fn test_repeated_and_invalid_shots() {
        let options = PlayOptions {
            seed: Some(3),
            auto_place: true,
            reveal_ai: false,
        };
        let out = run("A1\nA1\nK5\n", options);
        assert!(out.contains("You already fired at A1. Try again."));
        assert!(out.contains("Invalid coordinate."));
    }

    #[test]
    fn test_render_board() {
        let mut board = Board::new();
        board
            .place_ship(ShipType::new("Destroyer", 2), (0, 0), Orientation::Horizontal)
            .unwrap();
        board.shoot((0, 0)).unwrap();
        board.shoot((1, 1)).unwrap();

        let shown = render_board(&board, true);
        let lines: Vec<_> = shown.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].ends_with("10"));
        assert!(lines[1].starts_with("A   X  S  ~"));
        assert!(lines[2].starts_with("B   ~  0  ~"));

        let hidden = render_board(&board, false);
        assert!(hidden.lines().nth(1).unwrap().starts_with("A   X  ~  ~"));

        board.shoot((0, 1)).unwrap();
        let sunk = render_board(&board, false);
        assert!(sunk.lines().nth(1).unwrap().starts_with("A   #  #  ~"));
    }
}
