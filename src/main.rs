use clap::{Args, Parser, Subcommand};
use pokemon_tower::{
    Battle, BattleMode, BattleTower, Criterion, EngineResult, GameConfig, PokeTeam, Trainer,
};
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokemon-tower")]
#[command(about = "Simulate Pokemon team battles and battle tower runs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// RON config file (defaults are used if not specified)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct BattleArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Team discipline: set, rotate or optimise
    #[arg(short, long, default_value = "set")]
    mode: BattleMode,

    /// Ranking attribute for optimise: health, level, attack, defence or speed
    #[arg(long, default_value = "health")]
    criterion: Criterion,

    /// Rank optimised teams highest first
    #[arg(long)]
    reverse: bool,

    /// Apply each team's special reshuffle before the battle
    #[arg(long)]
    special: bool,

    /// Comma-separated stage names for player one (random if not specified)
    #[arg(long, value_delimiter = ',')]
    team1: Vec<String>,

    /// Comma-separated stage names for player two (random if not specified)
    #[arg(long, value_delimiter = ',')]
    team2: Vec<String>,

    /// Print the event log as JSON
    #[arg(long)]
    json: bool,

    /// Print the battle narrative to stdout
    #[arg(long)]
    narrate: bool,
}

#[derive(Args, Debug)]
struct TowerArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of enemy trainers, overrides the config file
    #[arg(short, long)]
    enemies: Option<usize>,

    /// Player trainer name
    #[arg(long, default_value = "Player")]
    name: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single battle between two trainers
    Battle(BattleArgs),
    /// Fight through a battle tower
    Tower(TowerArgs),
}

fn load_config(common: &CommonArgs) -> EngineResult<GameConfig> {
    let mut config = match &common.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if common.seed.is_some() {
        config.seed = common.seed;
    }
    Ok(config)
}

fn pick_team<R: Rng>(names: &[String], size: usize, rng: &mut R) -> EngineResult<PokeTeam> {
    let team = if names.is_empty() {
        PokeTeam::choose_randomly(size, rng)?
    } else {
        PokeTeam::choose_manually(names)?
    };
    Ok(team)
}

fn run_battle(args: &BattleArgs) -> EngineResult<()> {
    let config = load_config(&args.common)?;
    let chart = config.type_chart()?;
    let mut rng = config.rng();

    let mut trainers = [
        Trainer::new("Player 1", pick_team(&args.team1, config.team_size, &mut rng)?),
        Trainer::new("Player 2", pick_team(&args.team2, config.team_size, &mut rng)?),
    ];
    for trainer in trainers.iter_mut() {
        trainer.team.set_reversed(args.reverse);
        trainer.team.assemble(args.mode, args.criterion);
        if args.special {
            trainer.team.special()?;
        }
        println!("{}:\n{}", trainer.name, trainer.team);
    }

    let [player1, player2] = &mut trainers;
    let mut battle = Battle::new(player1, player2, args.mode, args.criterion, &chart)?;
    let winner = battle.commence_battle()?.map(|trainer| trainer.name.clone());

    if args.narrate {
        for line in battle.event_bus().narrative() {
            println!("{}", line);
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(battle.events())?);
    }
    match winner {
        Some(name) => println!("{} wins after {} exchanges", name, battle.exchanges()),
        None => println!("Draw after {} exchanges", battle.exchanges()),
    }
    println!("{}\n{}", battle.trainer(0), battle.trainer(1));
    Ok(())
}

fn run_tower(args: &TowerArgs) -> EngineResult<()> {
    let name = args.name.as_str();
    let mut config = load_config(&args.common)?;
    if let Some(enemies) = args.enemies {
        config.enemy_count = enemies;
    }
    let chart = config.type_chart()?;
    let mut rng = config.rng();
    let team = PokeTeam::choose_randomly(config.team_size, &mut rng)?;
    let enemy_count = config.enemy_count;

    let mut tower = BattleTower::new(config, rng)?.with_type_chart(chart);
    let lives = tower.set_my_trainer(Trainer::new(name, team));
    tower.generate_enemy_trainers(enemy_count)?;
    println!("{} enters the tower with {} lives", name, lives);

    while tower.battles_remaining() {
        let round = tower.next_battle()?;
        let result = match &round.winner {
            Some(winner) if *winner == round.player => "You win!".to_string(),
            Some(winner) => format!("{} wins.", winner),
            None => "Draw.".to_string(),
        };
        println!(
            "{} vs {}: {} Lives left: {} / {}",
            round.player, round.enemy, result, round.player_lives, round.enemy_lives
        );
    }
    println!("Defeated enemies: {}", tower.enemies_defeated());
    Ok(())
}

fn run(cli: Cli) -> EngineResult<()> {
    match &cli.command {
        Command::Battle(args) => run_battle(args),
        Command::Tower(args) => run_tower(args),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
