use std::sync::atomic::{AtomicU32, Ordering};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    account::{Account, TransactionError},
    command::TransactionCommand,
    statement::AccountSummary,
};

pub type BankId = u32;

/// Position of an account inside its bank.
pub type AccountId = usize;

static NEXT_BANK_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Error)]
pub enum BankError {
    #[error("Account {id} does not exist in this bank")]
    UnknownAccount { id: AccountId },
    #[error(transparent)]
    TransactionErr(#[from] TransactionError),
}

#[derive(Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.owner() == owner)
    }

    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        account.link_bank(self.id);
        self.accounts.push(account);
        let id = self.accounts.len() - 1;
        debug!(bank = %self.name, account = id, "account added");
        id
    }

    /// Name of this bank if `account` was registered with it.
    pub fn bank_name_of(&self, account: &Account) -> Option<&str> {
        (account.bank() == Some(self.id)).then_some(self.name.as_str())
    }

    /// Sum of all balances, `None` if it does not fit in a [`Decimal`].
    pub fn total_balance(&self) -> Option<Decimal> {
        self.accounts
            .iter()
            .try_fold(Decimal::ZERO, |total, acc| total.checked_add(acc.balance()))
    }

    /// Moves `amount` from one account to another. Works for accounts held
    /// anywhere, registered with this bank or not.
    ///
    /// Both sides are validated before either balance changes, so a failed
    /// transfer leaves both accounts untouched.
    pub fn transfer(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: Decimal,
    ) -> Result<(), TransactionError> {
        let debit = TransactionCommand::debit(amount)?;
        let credit = TransactionCommand::credit(amount)?;
        let debit_evt = match from.handle_transaction(debit) {
            Ok(evt) => evt,
            Err(err) => {
                warn!(bank = %self.name, from = from.owner(), %amount, "transfer refused: {err}");
                return Err(err.into());
            }
        };
        let credit_evt = to.handle_transaction(credit)?;
        from.apply(&debit_evt);
        to.apply(&credit_evt);
        debug!(bank = %self.name, from = from.owner(), to = to.owner(), %amount, "transfer completed");
        Ok(())
    }

    /// Same as [`Bank::transfer`], for accounts owned by this bank.
    pub fn transfer_between(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let from_acc = self
            .accounts
            .get(from)
            .ok_or(BankError::UnknownAccount { id: from })?;
        let to_acc = self
            .accounts
            .get(to)
            .ok_or(BankError::UnknownAccount { id: to })?;

        let debit = TransactionCommand::debit(amount).map_err(TransactionError::from)?;
        let credit = TransactionCommand::credit(amount).map_err(TransactionError::from)?;
        let debit_evt = match from_acc.handle_transaction(debit) {
            Ok(evt) => evt,
            Err(err) => {
                warn!(bank = %self.name, from, %amount, "transfer refused: {err}");
                return Err(TransactionError::from(err).into());
            }
        };
        if from == to {
            // funds are there, moving them in place changes nothing
            debug!(bank = %self.name, from, to, %amount, "transfer completed");
            return Ok(());
        }
        let credit_evt = to_acc
            .handle_transaction(credit)
            .map_err(TransactionError::from)?;

        // both events are valid, indexes were checked above
        self.accounts[from].apply(&debit_evt);
        self.accounts[to].apply(&credit_evt);
        debug!(bank = %self.name, from, to, %amount, "transfer completed");
        Ok(())
    }

    /// One summary per account, in the order they were added.
    pub fn statement(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        self.accounts.iter().map(|acc| AccountSummary {
            owner: acc.owner().to_owned(),
            balance: acc.balance(),
            bank: self.name.clone(),
        })
    }
}
