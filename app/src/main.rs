fn main() -> anyhow::Result<()> {
    crowdstake_lib::run()
}
