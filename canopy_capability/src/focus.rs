// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus delegation capability.

use alloc::boxed::Box;

use crate::{Capability, CapabilityHost};

/// Delegates programmatic focus into the component's primary interactive
/// descendant instead of the host boundary.
///
/// Idempotent: attaching twice installs delegation once, and detaching an
/// unattached instance is a no-op, so repeated attach/detach cycles are safe.
#[derive(Clone, Debug, Default)]
pub struct DelegatesFocus {
    installed: bool,
}

impl DelegatesFocus {
    /// Creates the capability in its unattached state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if delegation is currently installed on a host.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

impl<H: Copy + Eq> Capability<H> for DelegatesFocus {
    fn attach(&mut self, host: &mut dyn CapabilityHost<H>) {
        if !self.installed {
            host.set_focus_delegation(true);
            self.installed = true;
        }
    }

    fn detach(&mut self, host: &mut dyn CapabilityHost<H>) {
        if self.installed {
            host.set_focus_delegation(false);
            self.installed = false;
        }
    }

    fn clone_unattached(&self) -> Box<dyn Capability<H>> {
        Box::new(Self::new())
    }
}
