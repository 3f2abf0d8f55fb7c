//! Capital raid absentees command implementation

use serde::Serialize;

use crate::{
    cli::types::ids::ClanTag,
    coc::{
        types::{Player, RaidMember},
        CocClient,
    },
    error::CwlError,
    Result,
};

use super::{resolve_api_token, resolve_base_url, resolve_clan_tag};

/// Who skipped the latest raid weekend, and who raided but has since left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RaidAbsentees {
    /// Current members with no raid participation, in member-list order.
    pub absent: Vec<Player>,
    /// Participants no longer in the member list (left, renamed or just joined).
    pub departed: Vec<Player>,
}

/// Compare raid participants against the current member list by player tag.
pub fn raid_absentees(participants: &[Player], members: &[Player]) -> RaidAbsentees {
    RaidAbsentees {
        absent: members
            .iter()
            .filter(|member| !participants.contains(member))
            .cloned()
            .collect(),
        departed: participants
            .iter()
            .filter(|participant| !members.contains(participant))
            .cloned()
            .collect(),
    }
}

/// Fetch the latest raid season and the member list, then compare them.
pub async fn find_raid_absentees(client: &CocClient, clan_tag: &ClanTag) -> Result<RaidAbsentees> {
    let seasons = client.raid_seasons(clan_tag).await?;
    let latest = seasons
        .items
        .first()
        .ok_or_else(|| CwlError::NoRaidSeasons {
            clan_tag: clan_tag.to_string(),
        })?;
    let participants: Vec<Player> = latest.members.iter().map(RaidMember::player).collect();

    let profile = client.clan_profile(clan_tag).await?;

    Ok(raid_absentees(&participants, &profile.member_list))
}

/// Handle the raid absentees command
pub async fn handle_raid_absentees(clan_tag: Option<ClanTag>, as_json: bool) -> Result<()> {
    let clan_tag = resolve_clan_tag(clan_tag)?;
    let client = CocClient::with_base_url(&resolve_api_token()?, &resolve_base_url())?;

    // tarpaulin::skip - HTTP call, tested via find_raid_absentees
    let absentees = find_raid_absentees(&client, &clan_tag).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&absentees)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    for player in &absentees.departed {
        println!(
            "{} (No longer in clan, changed name, or only recently joined the clan)",
            player.name
        );
    }
    for player in &absentees.absent {
        println!("{}", player.name);
    }

    Ok(())
}
