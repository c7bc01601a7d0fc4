//! Agoge — Agent Competition Simulator Demo CLI
//!
//! Drives the simulator the way the marketplace front end does: list the
//! roster, let agents bid on an intent, stream the activity feed, show the
//! dashboard counters, and run a pending-intent sweep.
//!
//! Usage:
//!   cargo run -p demo -- roster
//!   cargo run -p demo -- propose --intent-id intent-1 --amount 1000 --asset "Gold Token"
//!   cargo run -p demo -- feed --count 30 --refreshes 5
//!   cargo run -p demo -- stats
//!   cargo run -p demo -- sweep
//!   cargo run -p demo -- --seed 42 compete --amount 2500 --asset "Tokenized T-Bill"

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agoge_contracts::{
    activity::{Activity, ActivityKind},
    agent::Agent,
    error::{AgogeError, AgogeResult},
    intent::{IntentRecord, IntentRequest, IntentStatus},
    proposal::Proposal,
};
use agoge_core::Simulator;
use agoge_feed::{IntentHistory, LiveFeed};
use agoge_roster::AgentRoster;
use agoge_sweep::{demo_pending_intents, run_sweep};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Agoge — simulated AI agents competing to fulfil RWA purchase intents.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Agoge agent-competition simulator demo",
    long_about = "Runs the Agoge simulator: agent proposals for an intent,\n\
                  the live activity feed, dashboard stats and intent sweeps."
)]
struct Cli {
    /// Seed the random stream. Ids, bids and feed contents then repeat;
    /// timestamps still follow the wall clock.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Load the agent roster from a TOML file instead of the built-in demo roster.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Print JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the agents as a leaderboard, highest reputation first.
    Roster {
        /// Only show agents with this specialization, e.g. `gold`.
        #[arg(long)]
        tag: Option<String>,
    },
    /// Generate competing proposals for one intent.
    Propose {
        #[arg(long)]
        intent_id: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        asset: Option<String>,
    },
    /// Generate the activity feed, optionally refreshing it in small batches.
    Feed {
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// Number of refresh batches to prepend after the initial feed.
        #[arg(long, default_value_t = 0)]
        refreshes: usize,
        #[arg(long, default_value_t = 3)]
        batch: usize,
        #[arg(long, default_value_t = agoge_feed::DEFAULT_MAX_LEN)]
        max_len: usize,
        /// Only show one kind: discovery, proposal, fulfillment or analysis.
        #[arg(long)]
        kind: Option<String>,
    },
    /// Show the aggregate dashboard counters.
    Stats,
    /// Sweep the demo pending intents and generate proposals for each.
    Sweep,
    /// Full flow: submit an intent, reveal bids as they arrive, pick the best.
    Compete {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        asset: Option<String>,
        /// Pause between revealed proposals, in milliseconds.
        #[arg(long, default_value_t = 0)]
        reveal_ms: u64,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = build_simulator(&cli).and_then(|mut sim| run(&cli, &mut sim));

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn build_simulator(cli: &Cli) -> AgogeResult<Simulator> {
    let roster = match &cli.roster {
        Some(path) => AgentRoster::from_file(path)?,
        None => AgentRoster::demo()?,
    };
    let roster = Arc::new(roster);

    Ok(match cli.seed {
        Some(seed) => Simulator::seeded(roster, seed),
        None => Simulator::with_entropy(roster),
    })
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn run(cli: &Cli, sim: &mut Simulator) -> AgogeResult<()> {
    match &cli.command {
        Command::Roster { tag } => run_roster(cli, sim, tag.as_deref()),
        Command::Propose { intent_id, amount, asset } => {
            let request = IntentRequest::new(intent_id.clone(), *amount, asset.as_deref())?;
            run_propose(cli, sim, &request)
        }
        Command::Feed { count, refreshes, batch, max_len, kind } => {
            let kind = kind.as_deref().map(str::parse::<ActivityKind>).transpose()?;
            run_feed(cli, sim, *count, *refreshes, *batch, *max_len, kind)
        }
        Command::Stats => run_stats(cli, sim),
        Command::Sweep => run_sweep_command(cli, sim),
        Command::Compete { amount, asset, reveal_ms } => {
            let intent_id = format!("intent-{}", sim.next_uuid().simple());
            let request = IntentRequest::new(intent_id, *amount, asset.as_deref())?;
            run_compete(cli, sim, &request, Duration::from_millis(*reveal_ms))
        }
    }
}

fn run_roster(cli: &Cli, sim: &Simulator, tag: Option<&str>) -> AgogeResult<()> {
    let ranked: Vec<&Agent> = sim
        .roster()
        .leaderboard()
        .into_iter()
        .filter(|a| tag.map_or(true, |t| a.specializes_in(t)))
        .collect();

    if cli.json {
        return print_json(&ranked);
    }

    println!("Agent roster ({} agents, {} active)", sim.roster().len(), sim.roster().active().count());
    if let Some(tag) = tag {
        println!("Specialization: {} ({} matching)", tag, ranked.len());
    }
    println!();
    for (rank, agent) in ranked.iter().enumerate() {
        println!(
            "  #{:<2} {} {:<18} rep {:>3}  {:>4} fulfilled  {:>5.1}% success  ~{}s  stake {:.1}  {}{}",
            rank + 1,
            agent.avatar,
            agent.name,
            agent.reputation,
            agent.total_fulfillments,
            agent.success_rate,
            agent.avg_execution_time_secs,
            agent.stake,
            agent.short_address(),
            if agent.is_active { "" } else { "  (inactive)" },
        );
        println!("      {}", agent.specializations.join(", "));
    }
    Ok(())
}

fn run_propose(cli: &Cli, sim: &mut Simulator, request: &IntentRequest) -> AgogeResult<()> {
    let proposals = sim.generate_proposals(request);

    if cli.json {
        #[derive(Serialize)]
        struct ProposeOutput<'a> {
            proposals: &'a [Proposal],
            agents: &'a [Agent],
        }
        return print_json(&ProposeOutput { proposals: &proposals, agents: sim.roster().agents() });
    }

    println!(
        "{} agents bid on {} ({} -> {})",
        proposals.len(),
        request.intent_id(),
        format_usd(request.input_amount()),
        request.asset_name()
    );
    println!();
    for proposal in &proposals {
        print_proposal(sim, proposal, request.input_amount());
    }
    Ok(())
}

fn run_feed(
    cli: &Cli,
    sim: &mut Simulator,
    count: usize,
    refreshes: usize,
    batch: usize,
    max_len: usize,
    kind: Option<ActivityKind>,
) -> AgogeResult<()> {
    let feed = LiveFeed::new(max_len);
    feed.replace(sim.generate_activity_feed(count))?;
    for _ in 0..refreshes {
        feed.prepend(sim.generate_activity_feed(batch))?;
    }

    let activities = feed.filter(kind)?;

    if cli.json {
        return print_json(&activities);
    }

    let now = sim.now();
    println!("Network activity ({} events)", activities.len());
    println!();
    for activity in &activities {
        print_activity(sim, activity, now);
    }
    Ok(())
}

fn run_stats(cli: &Cli, sim: &Simulator) -> AgogeResult<()> {
    let stats = sim.aggregate_stats();

    if cli.json {
        return print_json(&stats);
    }

    println!("Intents processed   {}", stats.total_intents);
    println!("Volume processed    {}", stats.volume_label());
    println!("Active agents       {}", stats.active_agents);
    println!("Success rate        {}", stats.success_rate_label());
    println!("Avg. settlement     {}", stats.fulfillment_time_label());
    println!("RWAs tracked        {}", stats.total_rwas_tracked);
    Ok(())
}

fn run_sweep_command(cli: &Cli, sim: &mut Simulator) -> AgogeResult<()> {
    let report = run_sweep(sim, &demo_pending_intents());

    if cli.json {
        return print_json(&report);
    }

    println!("{}", report.summary());
    for intent in &report.intents {
        println!(
            "  {:<12} {:<10} {:>16}  {:<8} {} proposals",
            intent.id, intent.user, intent.amount_label, intent.status, intent.proposal_count
        );
    }
    for error in &report.errors {
        println!("  error: {}", error);
    }
    Ok(())
}

/// Generate bids, reveal them in arrival order, pick the highest output and
/// record the fulfilled intent.
fn run_compete(
    cli: &Cli,
    sim: &mut Simulator,
    request: &IntentRequest,
    reveal_delay: Duration,
) -> AgogeResult<()> {
    let history = IntentHistory::new();
    history.add(IntentRecord::from_request(request, slug(request.asset_name()), sim.now()))?;

    let proposals = sim.generate_proposals(request);
    history.attach_proposals(request.intent_id(), proposals.clone())?;

    if !cli.json {
        println!(
            "Intent {} submitted: {} -> {}",
            request.intent_id(),
            format_usd(request.input_amount()),
            request.asset_name()
        );
        println!("Agents competing...");
        println!();
    }

    for proposal in &proposals {
        if !reveal_delay.is_zero() {
            std::thread::sleep(reveal_delay);
        }
        if !cli.json {
            print_proposal(sim, proposal, request.input_amount());
        }
    }

    let winner = proposals
        .iter()
        .max_by(|a, b| a.expected_output.total_cmp(&b.expected_output))
        .ok_or_else(|| AgogeError::ProposalNotFound {
            intent_id: request.intent_id().to_string(),
            proposal_id: "<none>".to_string(),
        })?;

    history.select_proposal(request.intent_id(), winner.id)?;
    history.update_status(request.intent_id(), IntentStatus::Fulfilled)?;
    let record = history.get(request.intent_id())?;

    info!(intent_id = %record.id, winner = %winner.agent_id, "intent fulfilled");

    if cli.json {
        return print_json(&record);
    }

    let name = agent_name(sim, winner);
    println!(
        "Selected {} at {}, intent {}.",
        name,
        format_usd(winner.expected_output),
        record.status
    );
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_json<T: Serialize + ?Sized>(value: &T) -> AgogeResult<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| AgogeError::Serialization {
        reason: format!("failed to render JSON output: {}", e),
    })?;
    println!("{}", rendered);
    Ok(())
}

fn print_proposal(sim: &Simulator, proposal: &Proposal, input_amount: f64) {
    println!(
        "  {:<18} {:>12}  ({:.2}% slippage)  {}s  {}% confidence  gas ${:.2}",
        agent_name(sim, proposal),
        format_usd(proposal.expected_output),
        proposal.slippage_pct(input_amount),
        proposal.estimated_time_secs,
        proposal.confidence,
        proposal.gas_estimate
    );
    println!("      route: {}", proposal.route);
    println!("      {}", proposal.analysis);
    println!();
}

fn print_activity(sim: &Simulator, activity: &Activity, now: chrono::DateTime<chrono::Utc>) {
    let who = sim
        .roster()
        .get(&activity.agent_id)
        .map(|a| format!("{} {}", a.avatar, a.name))
        .unwrap_or_else(|| activity.agent_id.to_string());

    let mut line = format!(
        "  {:>8}  [{:<11}] {} {}",
        time_ago(now, activity.timestamp),
        activity.kind,
        who,
        activity.action
    );
    if let (Some(confidence), Some(output)) = (activity.confidence, activity.expected_output) {
        line.push_str(&format!(" ({}% confidence, ${} expected)", confidence, output));
    }
    println!("{}", line);
}

fn agent_name(sim: &Simulator, proposal: &Proposal) -> String {
    sim.roster()
        .get(&proposal.agent_id)
        .map(|a| format!("{} {}", a.avatar, a.name))
        .unwrap_or_else(|| proposal.agent_id.to_string())
}

fn time_ago(now: chrono::DateTime<chrono::Utc>, then: chrono::DateTime<chrono::Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    format!("{}h ago", minutes / 60)
}

fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}
