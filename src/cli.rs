use clap::builder::FalseyValueParser;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Volatility score for a Binance DEX market", long_about = None)]
pub struct Args {
    /// Window start, epoch milliseconds
    #[arg(long, env = "START", default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Window end, epoch milliseconds
    #[arg(long, env = "END", default_value_t = 0, allow_negative_numbers = true)]
    pub end: i64,

    /// Base asset symbol, quoted in BNB
    #[arg(long, env = "SYMBOL", default_value = "")]
    pub symbol: String,

    /// Log every request URL and raw response body
    #[arg(short, long, env = "VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "volscore",
            "--start",
            "1560000000000",
            "--end",
            "1560086400000",
            "--symbol",
            "abc",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.start, 1_560_000_000_000);
        assert_eq!(args.end, 1_560_086_400_000);
        assert_eq!(args.symbol, "abc");
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_non_integer_start() {
        let result = Args::try_parse_from(["volscore", "--start", "yesterday"]);
        assert!(result.is_err());
    }
}
