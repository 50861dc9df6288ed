use std::hash::{Hash, Hasher};

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    bank::BankId,
    command::{AccountCommandError, TransactionAction, TransactionCommand},
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AccountEventKind {
    Debited,
    Credited,
}

#[derive(Debug)]
pub(crate) struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient Funds")]
    InsufficientFunds,
    #[error("Opening balance must not be negative, got {balance}")]
    NegativeBalance { balance: Decimal },
    #[error("Balance {balance} cannot take {amount} more")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// Failure of a single debit or credit, either while validating the
/// amount or while checking it against the account.
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// A balance held by an owner.
///
/// Two accounts compare equal when owner and balance match. The bank link is
/// an association only and is ignored by `==` and `Hash`.
#[derive(Debug, Clone)]
pub struct Account {
    owner: String,
    balance: Decimal,
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Result<Self, AccountError> {
        if balance < Decimal::zero() {
            return Err(AccountError::NegativeBalance { balance });
        }
        Ok(Self {
            owner: owner.into(),
            balance,
            bank: None,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Bank this account was registered with, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn link_bank(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    pub fn debit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        let evt = self.handle_transaction(TransactionCommand::debit(amount)?)?;
        self.apply(&evt);
        Ok(())
    }

    pub fn credit(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        let evt = self.handle_transaction(TransactionCommand::credit(amount)?)?;
        self.apply(&evt);
        Ok(())
    }

    /// `event` must come from [`Account::handle_transaction`] on this
    /// account's current balance, which already checked the arithmetic.
    pub(crate) fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
        }
    }

    pub(crate) fn handle_transaction(
        &self,
        command: TransactionCommand,
    ) -> Result<AccountEvent, AccountError> {
        let amount = command.amount();
        match command.action() {
            TransactionAction::Credit => {
                if self.balance.checked_add(amount).is_none() {
                    return Err(AccountError::BalanceOverflow {
                        balance: self.balance,
                        amount,
                    });
                }
                Ok(AccountEvent {
                    amount,
                    kind: AccountEventKind::Credited,
                })
            }
            TransactionAction::Debit => {
                // amount is positive, so the difference stays within range
                if self.balance >= amount {
                    Ok(AccountEvent {
                        amount,
                        kind: AccountEventKind::Debited,
                    })
                } else {
                    Err(AccountError::InsufficientFunds)
                }
            }
        }
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.balance.hash(state);
    }
}
