fn main() -> anyhow::Result<()> {
    aurora_example::desktop_main()
}
