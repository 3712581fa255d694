use clap::Parser;
use log::info;
use ordered_tree::{Order, Tree, TreeError};

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "Walks a small binary search tree through every operation")]
struct Args {
    /// Values inserted, in order, to build the tree.
    #[arg(long, num_args = 1.., default_values_t = [41, 20, 11, 29, 32, 65, 70])]
    values: Vec<i64>,

    /// Values to look up after building the tree.
    #[arg(long, num_args = 1.., default_values_t = [15, 65])]
    lookup: Vec<i64>,

    /// Value to delete before the order statistic query.
    #[arg(long, default_value_t = 20)]
    delete: i64,

    /// Rank of the largest value to report after the deletion.
    #[arg(long, default_value_t = 2)]
    k: usize,
}

fn main() -> Result<(), TreeError> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut tree = Tree::new();
    for &value in &args.values {
        tree.insert(value);
    }
    info!("built tree from {} values", args.values.len());

    for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
        println!("{}: {}", order, tree.render(order));
    }
    println!("Size: {}", tree.size());
    println!("Max depth: {}", tree.max_depth());
    for target in &args.lookup {
        println!("Lookup {}: {}", target, u8::from(tree.contains(target)));
    }
    println!("Find max: {}", tree.find_max()?);
    println!("Find min: {}", tree.find_min_recursive()?);

    if tree.delete(&args.delete).is_none() {
        info!("{} was not in the tree", args.delete);
    }
    println!("{}: {}", Order::PreOrder, tree.render(Order::PreOrder));

    println!(
        "Kth largest element (k={}): {}",
        args.k,
        tree.kth_largest(args.k)?
    );

    tree.dispose();
    println!("Tree deleted.");

    Ok(())
}
