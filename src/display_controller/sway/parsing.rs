use crate::display::{DisplayMode, ModeCatalog};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RpcOutput<'a> {
    name: &'a str,
    scale: Option<f64>,
    current_mode: Option<RpcMode>,
    modes: Vec<RpcMode>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
struct RpcMode {
    width: i32,
    height: i32,
    refresh: i32,
}

#[derive(Debug, Deserialize)]
struct RpcReply {
    success: bool,
    error: Option<String>,
}

pub(super) fn parse(swaymsg_output: &[u8]) -> Result<Vec<ModeCatalog>, String> {
    let rpc_outputs: Vec<RpcOutput> = serde_json::from_slice(swaymsg_output)
        .map_err(|error| format!("unexpected output of swaymsg -t get_outputs: {error}"))?;

    Ok(rpc_outputs
        .iter()
        .map(|rpc_output| {
            // Sway scales per output, not per mode, so the output's scale
            // attaches to every catalog entry. Fractional scales round.
            let scale = rpc_output.scale.unwrap_or(1.0).round() as i32;

            // The active mode is identified by exact value, the way sway
            // reports it; an output that is off has no current mode.
            let current = rpc_output.current_mode.and_then(|current_mode| {
                rpc_output.modes.iter().position(|mode| *mode == current_mode)
            });

            ModeCatalog {
                name: rpc_output.name.to_string(),
                modes: rpc_output
                    .modes
                    .iter()
                    .map(|rpc_mode| DisplayMode {
                        width: rpc_mode.width,
                        height: rpc_mode.height,
                        scale,
                        frequency: rpc_mode.refresh,
                    })
                    .collect(),
                current,
            }
        })
        .collect())
}

/// Scans a swaymsg command reply for refused commands.
pub(super) fn check_replies(swaymsg_output: &[u8]) -> Result<(), String> {
    let replies: Vec<RpcReply> = serde_json::from_slice(swaymsg_output)
        .map_err(|error| format!("unexpected swaymsg reply: {error}"))?;

    match replies.iter().find(|reply| !reply.success) {
        Some(reply) => Err(reply
            .error
            .clone()
            .unwrap_or_else(|| "swaymsg reported failure without a reason".to_string())),
        None => Ok(()),
    }
}
