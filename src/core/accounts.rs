use std::collections::{HashMap, HashSet};

use super::mapping::MappingTable;
use super::types::{QoyodAccount, ZohoAccount};

/// Convert a flat list of Qoyod accounts into Zoho import rows, ordered
/// so that every account appears strictly after its parent.
///
/// Accounts are emitted in input order, except that an unemitted ancestor
/// is always pulled forward ahead of its first descendant. Each account
/// is emitted exactly once no matter how many children reference it. An
/// account whose declared parent code is absent from the input is treated
/// as a root: its parent field stays empty and no error is raised.
pub fn convert_accounts(accounts: &[QoyodAccount], mapping: &MappingTable) -> Vec<ZohoAccount> {
    let index: HashMap<&str, &QoyodAccount> =
        accounts.iter().map(|a| (a.code.as_str(), a)).collect();

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut visiting: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(accounts.len());

    for account in accounts {
        emit_with_ancestors(account, &index, &mut emitted, &mut visiting, mapping, &mut out);
    }

    out
}

/// Depth-first, ancestor-first emission. The `visiting` set breaks
/// parent-code cycles: a code seen again while its ancestor chain is
/// still being resolved is treated as already processed instead of
/// recursing forever.
fn emit_with_ancestors<'a>(
    account: &'a QoyodAccount,
    index: &HashMap<&str, &'a QoyodAccount>,
    emitted: &mut HashSet<&'a str>,
    visiting: &mut HashSet<&'a str>,
    mapping: &MappingTable,
    out: &mut Vec<ZohoAccount>,
) {
    if emitted.contains(account.code.as_str()) || !visiting.insert(account.code.as_str()) {
        return;
    }

    let parent = account
        .parent_code
        .as_deref()
        .and_then(|code| index.get(code).copied());

    if let Some(parent) = parent {
        emit_with_ancestors(parent, index, emitted, visiting, mapping, out);
    }

    out.push(ZohoAccount {
        name: account.name.clone(),
        account_type: mapping.resolve(&account.account_type).to_string(),
        code: account.code.clone(),
        description: account.description.clone(),
        parent_account: parent.map(|p| p.name.clone()),
    });
    emitted.insert(account.code.as_str());
}
