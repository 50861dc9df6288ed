/// Account balance handling. Every debit and credit is validated into an
/// event first, and the balance only changes when the event is applied.
pub mod account;

/// Validates raw amounts into debit/credit commands executed by [`account`].
pub mod command;

/// Named collection of accounts, plus transfers between them.
pub mod bank;

/// CSV rendering of a bank's accounts.
pub mod statement;
