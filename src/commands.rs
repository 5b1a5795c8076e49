use rand::{CryptoRng, Rng};

/// Marks a message as a bot command.
pub const COMMAND_PREFIX: char = '-';

pub const DICE_USAGE: &str = "Usage: -dice [number]";
pub const INVALID_NUMBER: &str = "That was not a valid number!";

/// A recognised chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Ping,
    Pong,
    /// `-dice` with its first argument, if any.
    Dice(Option<&'a str>),
}

impl<'a> Command<'a> {
    /// Parse message text. Returns `None` for plain chatter and unknown
    /// commands.
    pub fn parse(text: &'a str) -> Option<Self> {
        // Trailing spaces carry no empty arguments, so `-dice ` is plain `-dice`.
        let body = text.strip_prefix(COMMAND_PREFIX)?.trim_end_matches(' ');
        let mut tokens = body.split(' ');
        let name = tokens.next()?.to_lowercase();

        match name.as_str() {
            "ping" => Some(Command::Ping),
            "pong" => Some(Command::Pong),
            "dice" => Some(Command::Dice(tokens.next())),
            _ => None,
        }
    }
}

/// Reply for one incoming message, or `None` if the bot stays silent.
pub fn handle<R: Rng + CryptoRng>(text: &str, rng: &mut R) -> Option<String> {
    match Command::parse(text)? {
        Command::Ping => Some("pong".to_string()),
        Command::Pong => Some("ping".to_string()),
        Command::Dice(arg) => dice(arg, rng),
    }
}

fn dice<R: Rng + CryptoRng>(arg: Option<&str>, rng: &mut R) -> Option<String> {
    let Some(arg) = arg else {
        return Some(DICE_USAGE.to_string());
    };

    // Non-numeric arguments get no reply at all, not the usage line.
    // Kept as-is for compatibility; it looks like an oversight.
    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match arg.parse::<i32>() {
        // Zero sides is an empty range, answered like an overflow.
        Ok(sides) if sides > 0 => {
            let roll = rng.random_range(0..sides);
            Some(format!("d{}: {}", sides, roll))
        }
        _ => Some(INVALID_NUMBER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn reply(text: &str) -> Option<String> {
        handle(text, &mut rng())
    }

    fn parse_roll(reply: &str, sides: i32) -> i32 {
        let prefix = format!("d{}: ", sides);
        let roll = reply
            .strip_prefix(&prefix)
            .unwrap_or_else(|| panic!("unexpected reply {:?}", reply));
        roll.parse().unwrap()
    }

    #[test]
    fn test_ping_pong() {
        assert_eq!(reply("-ping").as_deref(), Some("pong"));
        assert_eq!(reply("-pong").as_deref(), Some("ping"));
        assert_eq!(reply("-PiNg").as_deref(), Some("pong"));
    }

    #[test]
    fn test_ignores_non_commands() {
        assert_eq!(reply("ping"), None);
        assert_eq!(reply(" -ping"), None);
        assert_eq!(reply("hello -dice 6"), None);
        assert_eq!(reply(""), None);
        assert_eq!(reply("-"), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(reply("-roll 6"), None);
        assert_eq!(reply("-pingpong"), None);
    }

    #[test]
    fn test_dice_usage() {
        assert_eq!(reply("-dice").as_deref(), Some(DICE_USAGE));
        assert_eq!(reply("-Dice").as_deref(), Some(DICE_USAGE));
    }

    #[test]
    fn test_dice_trailing_space_is_usage() {
        assert_eq!(reply("-dice ").as_deref(), Some(DICE_USAGE));
        assert_eq!(reply("-DICE   ").as_deref(), Some(DICE_USAGE));
    }

    #[test]
    fn test_dice_non_numeric_is_silent() {
        assert_eq!(reply("-dice abc"), None);
        assert_eq!(reply("-dice 6a"), None);
        assert_eq!(reply("-dice -6"), None);
        assert_eq!(reply("-dice 6.5"), None);
        // double space leaves an empty argument
        assert_eq!(reply("-dice  6"), None);
        assert_eq!(reply("-dice ٣"), None);
    }

    #[test]
    fn test_dice_overflow() {
        assert_eq!(
            reply("-dice 99999999999999999999").as_deref(),
            Some(INVALID_NUMBER)
        );
        assert_eq!(reply("-dice 2147483648").as_deref(), Some(INVALID_NUMBER));
    }

    #[test]
    fn test_dice_zero() {
        assert_eq!(reply("-dice 0").as_deref(), Some(INVALID_NUMBER));
        assert_eq!(reply("-dice 000").as_deref(), Some(INVALID_NUMBER));
    }

    #[test]
    fn test_dice_in_range() {
        let mut rng = rng();
        for sides in [1, 2, 6, 20, 100, 1_000_000, i32::MAX] {
            for _ in 0..200 {
                let reply = handle(&format!("-dice {}", sides), &mut rng).unwrap();
                let roll = parse_roll(&reply, sides);
                assert!((0..sides).contains(&roll), "{} out of range", reply);
            }
        }
    }

    #[test]
    fn test_dice_one_always_zero() {
        assert_eq!(reply("-dice 1").as_deref(), Some("d1: 0"));
    }

    #[test]
    fn test_dice_case_insensitive() {
        let upper = handle("-DICE 6", &mut rng());
        let lower = handle("-dice 6", &mut rng());
        assert!(upper.is_some());
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_dice_leading_zeros_and_extra_args() {
        let reply = reply("-dice 0006 extra").unwrap();
        let roll = parse_roll(&reply, 6);
        assert!((0..6).contains(&roll));
    }

    #[test]
    fn test_dice_covers_all_faces() {
        let mut rng = rng();
        let mut seen = [false; 6];
        for _ in 0..500 {
            let reply = handle("-dice 6", &mut rng).unwrap();
            seen[parse_roll(&reply, 6) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("-ping"), Some(Command::Ping));
        assert_eq!(Command::parse("-dice"), Some(Command::Dice(None)));
        assert_eq!(Command::parse("-dice 12 x"), Some(Command::Dice(Some("12"))));
        assert_eq!(Command::parse("-dice "), Some(Command::Dice(None)));
        assert_eq!(Command::parse("-dice 6  "), Some(Command::Dice(Some("6"))));
        assert_eq!(Command::parse("-ping "), Some(Command::Ping));
        assert_eq!(Command::parse("dice 12"), None);
    }
}
