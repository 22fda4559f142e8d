//! Prints the default `observe` configuration as TOML, for a user to copy
//! and edit (mirrors the teacher's `gamerunner_config` bin).

use hazelobserver::config::ObserverConfig;

fn main() {
    let config = serdeconv::to_toml_string(&ObserverConfig::default()).expect("failed to generate config file");
    println!("{}", config);
}
