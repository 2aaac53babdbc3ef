// perfcmp - Benchmark comparison and regression scoring
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use crate::cli::Cli;
use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `shell` to stdout.
pub fn completion(shell: Shell) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for perfcmp completions in `shell`.
///
/// # Examples
///
/// ```
/// use clap_complete::Shell;
/// use perfcmp_cli::commands::installation_instructions;
///
/// assert!(installation_instructions(Shell::Bash).contains("~/.bashrc"));
/// ```
pub fn installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Bash: add to ~/.bashrc\n\
             eval \"$(perfcmp completion bash)\"\n"
            .to_string(),
        Shell::Zsh => "# Zsh: save into a directory on $fpath\n\
             perfcmp completion zsh > ~/.zsh/completions/_perfcmp\n"
            .to_string(),
        Shell::Fish => "# Fish:\n\
             perfcmp completion fish > ~/.config/fish/completions/perfcmp.fish\n"
            .to_string(),
        Shell::PowerShell => "# PowerShell: add to $PROFILE\n\
             perfcmp completion powershell | Out-String | Invoke-Expression\n"
            .to_string(),
        Shell::Elvish => "# Elvish: add to ~/.elvish/rc.elv\n\
             eval (perfcmp completion elvish | slurp)\n"
            .to_string(),
        other => format!("# No installation notes for {other}\n"),
    }
}
