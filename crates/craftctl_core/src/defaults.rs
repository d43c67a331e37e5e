//! Default server configuration written by `reset`.
//!
//! Kept as ordered `(key, value)` pairs rather than file text so a reset never
//! has to parse anything.

/// Contents of the EULA flag file after a reset.
pub const EULA_ACCEPTED: &str = "eula=true\n";

/// The default `server.properties` template, in key order.
pub const DEFAULT_PROPERTIES: [(&str, &str); 30] = [
    ("allow-flight", "false"),
    ("allow-nether", "true"),
    ("difficulty", "1"),
    ("enable-command-block", "false"),
    ("enable-query", "false"),
    ("enable-rcon", "false"),
    ("force-gamemode", "false"),
    ("gamemode", "0"),
    ("generate-structures", "true"),
    ("generator-settings", ""),
    ("hardcore", "false"),
    ("level-name", "world"),
    ("level-seed", ""),
    ("level-type", "DEFAULT"),
    ("max-build-height", "256"),
    ("max-players", "20"),
    ("motd", "A Minecraft Server"),
    ("online-mode", "true"),
    ("op-permission-level", "4"),
    ("player-idle-timeout", "0"),
    ("pvp", "true"),
    ("resource-pack", ""),
    ("server-ip", ""),
    ("server-port", "25565"),
    ("spawn-animals", "true"),
    ("spawn-monsters", "true"),
    ("spawn-npcs", "true"),
    ("spawn-protection", "16"),
    ("view-distance", "10"),
    ("white-list", "false"),
];

/// Look up the template value for an already-normalized key.
pub fn default_value(key: &str) -> Option<&'static str> {
    DEFAULT_PROPERTIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
