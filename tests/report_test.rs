use aeon_pool_arb_rs::report::{render_json_lines, render_text};
use aeon_pool_arb_rs::{FileSink, Opportunity, OpportunitySink, OutputFormat, TradeDirection};

fn weth_to_dai() -> Opportunity {
    Opportunity {
        direction: TradeDirection::AtoB,
        sell_pool: "Sushiswap".to_string(),
        buy_pool: "UniswapV2".to_string(),
        profit: 0.25,
        token_sold: "WETH".to_string(),
        profit_token: "DAI".to_string(),
        narrative: "Sell WETH -> DAI on Sushiswap and buy DAI -> WETH on UniswapV2".to_string(),
    }
}

fn dai_to_weth() -> Opportunity {
    Opportunity {
        direction: TradeDirection::BtoA,
        sell_pool: "UniswapV2".to_string(),
        buy_pool: "Sushiswap".to_string(),
        profit: 0.5,
        token_sold: "DAI".to_string(),
        profit_token: "WETH".to_string(),
        narrative: "Sell DAI -> WETH on UniswapV2 and buy WETH -> DAI on Sushiswap".to_string(),
    }
}

#[test]
fn text_lines_name_direction_profit_token_and_details() {
    let text = render_text(&[weth_to_dai(), dai_to_weth()]);
    assert_eq!(
        text,
        "Arbitrage Opportunity Found! Direction: WETH -> DAI\n\
         Profit: 0.25 DAI\n\
         Details: Sell WETH -> DAI on Sushiswap and buy DAI -> WETH on UniswapV2\n\
         Arbitrage Opportunity Found! Direction: DAI -> WETH\n\
         Profit: 0.5 WETH\n\
         Details: Sell DAI -> WETH on UniswapV2 and buy WETH -> DAI on Sushiswap\n"
    );
}

#[test]
fn empty_cycle_renders_no_arbitrage_line() {
    assert_eq!(render_text(&[]), "No arbitrage found.\n");
    assert_eq!(render_json_lines(&[]).unwrap(), "");
}

#[test]
fn json_lines_deserialize_back() {
    let rendered = render_json_lines(&[weth_to_dai(), dai_to_weth()]).unwrap();
    let parsed: Vec<Opportunity> = rendered
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, vec![weth_to_dai(), dai_to_weth()]);
    assert!(rendered.contains("\"direction\":\"AtoB\""));
}

#[tokio::test]
async fn file_sink_appends_across_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opportunities.txt");
    let sink = FileSink::new(&path, OutputFormat::Text);

    sink.report(&[]).await.unwrap();
    sink.report(&[weth_to_dai()]).await.unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "No arbitrage found.");
    assert_eq!(lines[1], "Arbitrage Opportunity Found! Direction: WETH -> DAI");
    assert_eq!(sink.path(), path.as_path());
}

#[tokio::test]
async fn json_sink_skips_empty_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opportunities.jsonl");
    let sink = FileSink::new(&path, OutputFormat::Json);

    sink.report(&[]).await.unwrap();
    assert!(!path.exists());

    sink.report(&[dai_to_weth()]).await.unwrap();
    sink.report(&[weth_to_dai()]).await.unwrap();
    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn unwritable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("missing").join("out.txt"), OutputFormat::Text);
    let result = sink.report(&[weth_to_dai()]).await;
    assert!(matches!(result, Err(aeon_pool_arb_rs::ScannerError::IoError(_))));
}
