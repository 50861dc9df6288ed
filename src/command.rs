use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Debit,
    Credit,
}

/// A debit or credit with a strictly positive amount. Only built through
/// [`TransactionCommand::parse`].
#[derive(Debug, Clone)]
pub struct TransactionCommand {
    action: TransactionAction,
    amount: Decimal,
}

#[derive(Debug, Error)]
pub enum AccountCommandError {
    #[error("Amount must be positive for {action:?}")]
    NonPositiveAmount { action: TransactionAction },
}

impl TransactionCommand {
    /// Builds a command only for strictly positive amounts.
    pub fn parse(
        action: TransactionAction,
        amount: Decimal,
    ) -> Result<Self, AccountCommandError> {
        if amount > Decimal::zero() {
            Ok(Self { action, amount })
        } else {
            Err(AccountCommandError::NonPositiveAmount { action })
        }
    }

    pub fn action(&self) -> TransactionAction {
        self.action
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn debit(amount: Decimal) -> Result<Self, AccountCommandError> {
        Self::parse(TransactionAction::Debit, amount)
    }

    pub fn credit(amount: Decimal) -> Result<Self, AccountCommandError> {
        Self::parse(TransactionAction::Credit, amount)
    }
}
