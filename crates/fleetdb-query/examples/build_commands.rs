//! Command assembly walkthrough
//!
//! Run with: cargo run --example build_commands -p fleetdb-query
//!
//! Builds one command of each form and prints it, then shows how invalid
//! input is rejected before it can reach the command text.

use fleetdb_query::{Builder, QueryBuilder, QueryResult, agent, global};

fn main() -> QueryResult<()> {
    // === Fleet-wide queries ===

    let command = global().select_all().from_table("agent")?.build();
    println!("fleet listing:   {command:?}");

    let command = global()
        .select_column("value")?
        .from_table("info")?
        .where_column("key")?
        .equals_to("openssl_support")?
        .build();
    println!("config probe:    {command:?}");

    // === Per-endpoint queries ===

    let command = agent("0")?
        .select_all()
        .from_table("sys_programs")?
        .where_column("name")?
        .equals_to("bash")?
        .build();
    println!("program lookup:  {command:?}");

    let command = agent("42")?
        .select_all()
        .from_table("sys_hotfixes")?
        .where_column("hotfix")?
        .is_not_null()
        .and_column("architecture")?
        .is_null()
        .build();
    println!("hotfix filter:   {command:?}");

    // === Named commands ===

    let command = QueryBuilder::builder()
        .global_get_command("agent-info 1")?
        .build();
    println!("global get:      {command:?}");

    let command = QueryBuilder::builder()
        .agent_get_packages_command("1")?
        .build();
    println!("agent packages:  {command:?}");

    // === Rejected input ===

    let err = agent("0")?
        .select_all()
        .from_table("sys_programs")?
        .where_column("name")?
        .equals_to("bash' OR 1=1 --")
        .unwrap_err();
    println!("injection try:   {err}");

    let err = agent("1; drop").unwrap_err();
    println!("bad agent id:    {err}");

    Ok(())
}
